pub mod profile;

pub use profile::mock_profile;
