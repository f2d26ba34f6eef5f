//! Trait seams between the layers.
//!
//! [`Transport`] separates the client from the network; [`ProductSource`]
//! separates the web layer from the client.

mod source;
mod transport;

pub use source::ProductSource;
pub use transport::Transport;
