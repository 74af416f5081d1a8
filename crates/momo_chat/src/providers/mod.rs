pub mod mock;
pub mod openai;

pub use mock::{FailingClient, MockClient};
pub use openai::OpenAiClient;
