mod loader;

pub use loader::FixtureLoader;
