//! JSON batch interface.
//!
//! A request document carries the network (`base_requests`), optional
//! routing and render settings, and a list of queries (`stat_requests`).
//! The response is a JSON array with one answer per query, in order.

mod dto;
mod reader;

pub use dto::{
    BaseRequest, BusRequest, BusResponse, MapResponse, NotFoundResponse, RequestDocument,
    RouteItem, RouteResponse, StatRequest, StatResponse, StopRequest, StopResponse,
};
pub use reader::{ProcessOptions, answer, load_catalogue, process, process_str};
