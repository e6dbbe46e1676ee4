pub mod message;
pub mod todo;

pub use message::MessageBody;
pub use todo::{CreateTodoInput, Todo, UpdateTodoInput};
