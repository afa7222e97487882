//! Generic name lookup port.
//!
//! Resolving the name of an arbitrary id (characters, corporations,
//! structures) goes through a remote API. The request is fire-and-forget:
//! the fetcher invokes the callback exactly once, later, with the name or an
//! error message.

/// Completion callback for a name fetch.
pub type NameCallback = Box<dyn FnOnce(Result<String, String>) + Send + 'static>;

/// Asynchronous name lookup.
pub trait NameFetcher: Send + Sync {
    /// Start fetching the name of `id`. `callback` runs once on completion.
    fn fetch_generic_name(&self, id: u64, callback: NameCallback);
}
