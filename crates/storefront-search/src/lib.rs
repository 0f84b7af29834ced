pub mod debounce;
pub mod sequencer;

pub use debounce::{SearchRequest, SuggestState, SuggestionBox};
pub use sequencer::{Generation, RequestSequencer};
