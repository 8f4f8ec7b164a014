pub mod generate_readme;

pub use generate_readme::{GenerateReadmeUseCase, GenerationError};
