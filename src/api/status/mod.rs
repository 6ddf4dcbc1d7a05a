/*
* Status endpoints: constant text responses on `/` and `/hello`.
*/

pub mod handler;
pub mod routes;

pub use handler::{HELLO_MESSAGE, ROOT_MESSAGE};
pub use routes::status_routes;
