mod buf;
mod buf_mut;

pub use buf::ReadBuf;
pub use buf_mut::BufMutExt;
