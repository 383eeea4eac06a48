pub mod json_file;
pub mod memory;
pub mod mock_data;

pub use json_file::JsonFileStore;
pub use memory::InMemoryStore;
pub use mock_data::{generate_mock_data, MockDataCache, MockDataSet};
