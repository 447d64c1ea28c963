//! API operations, one module per family
//!
//! Each operation validates its arguments synchronously, builds a request
//! through the shared normalizer, and returns its typed payload. Every
//! operation also has a `*_with_callback` adapter that spawns the call and
//! hands the single outcome to the callback instead; whichever channel the
//! caller picks is the exclusive consumer of that call's result.

mod device;
mod push;
mod pubsub;
