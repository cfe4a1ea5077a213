//! Draft publishing engine
//!
//! Turns note content into a Typefully draft:
//! 1. Compose - build the payload from sanitized text
//! 2. Resolve - pick the social set to publish under
//! 3. Execute - submit and classify the outcome

mod compose;
mod execute;
mod pipeline;
mod progress;
mod resolve;

pub use compose::{
    append_tags, compose_draft, ComposeOptions, MSG_EMPTY_CONTENT, MSG_NO_TARGET_PLATFORM,
};
pub use execute::{
    classify_reply, classify_transport_error, submit_draft, MSG_API_KEY_CONFIGURATION_REQUIRED,
    MSG_FAILED_TO_PUBLISH, MSG_FAILED_TO_PUBLISH_POSSIBLE_API_KEY_ISSUE, MSG_SERVICE_UNAVAILABLE,
};
pub use pipeline::{prepare_draft, publish};
pub use progress::{NoopProgress, Phase, ProgressCallback};
pub use resolve::{
    fetch_social_sets, resolve_social_set, MSG_NO_SOCIAL_SETS, MSG_SOCIAL_SETS_FETCH_FAILED,
};
