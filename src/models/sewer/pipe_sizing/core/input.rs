mod design_constants;
mod pipe_spec;

pub use design_constants::DesignConstants;
pub use pipe_spec::PipeSpec;
