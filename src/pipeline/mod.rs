use std::path::PathBuf;

use crate::report::ToolMeta;

pub mod bands;
pub mod bullet;

#[derive(Debug, Clone)]
pub struct RunContext {
    pub out_dir: PathBuf,
    pub write_html: bool,
    pub tool: ToolMeta,
}

#[derive(Debug, Clone)]
pub struct WrittenOutputs {
    pub spec: PathBuf,
    pub html: Option<PathBuf>,
    pub data: Option<PathBuf>,
    pub summary: PathBuf,
}
