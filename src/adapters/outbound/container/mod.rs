/// Container runtime adapters for running certification images
mod podman_runner;

pub use podman_runner::PodmanRunner;
