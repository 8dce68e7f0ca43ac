mod practice;
mod state;
mod topics;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use practice::PracticeView;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use topics::TopicsView;
