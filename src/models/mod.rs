pub mod movie;
pub mod outcome;
pub mod submission;
pub mod validation;

pub use movie::{Movie, MovieCandidate, MovieDocument};
pub use outcome::{Failure, Operation, Outcome, Payload};
pub use submission::{FieldValue, ListPolicy, ListValue, MovieSubmission, SubmissionError};
pub use validation::{validate_movie, Clock, FixedClock, SystemClock, ValidationError};
