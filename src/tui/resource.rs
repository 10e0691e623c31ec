/// Async request state, after Elm's RemoteData pattern.
///
/// Replaces separate `loading: bool` and `data: Option<T>` fields with one
/// explicit enum, so "loading", "shown result" and "failed" cannot coexist.
#[derive(Clone, Debug, PartialEq)]
pub enum Resource<T, E = String> {
    /// No request has been made yet (initial state)
    NotAsked,

    /// Request is in progress
    Loading,

    /// Request succeeded with data
    Success(T),

    /// Request failed with error
    Failure(E),
}

impl<T, E> Resource<T, E> {
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Resource::Success(data),
            Err(e) => Resource::Failure(e),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Resource::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Resource::Success(_))
    }

    /// Reference to the data if successful
    pub fn to_option(&self) -> Option<&T> {
        match self {
            Resource::Success(data) => Some(data),
            _ => None,
        }
    }
}

impl<T, E> Default for Resource<T, E> {
    fn default() -> Self {
        Resource::NotAsked
    }
}

impl<T, E> From<Result<T, E>> for Resource<T, E> {
    fn from(result: Result<T, E>) -> Self {
        Resource::from_result(result)
    }
}
