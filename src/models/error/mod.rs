mod api;
pub use api::*;

mod relayer;
pub use relayer::*;
