/// One de-interleaved Reed-Solomon block: data codewords followed by their
/// EC codewords
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CodewordBlock {
    /// Data codewords
    pub msg: Vec<u8>,
    /// EC codewords
    pub ec: Vec<u8>,
}

impl CodewordBlock {
    pub fn new(msg: Vec<u8>, ec: Vec<u8>) -> Self {
        Self { msg, ec }
    }

    /// Number of EC symbols (`nsym`)
    pub fn nsym(&self) -> usize {
        self.ec.len()
    }

    /// Full received word, message first
    pub fn codeword(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.msg.len() + self.ec.len());
        out.extend_from_slice(&self.msg);
        out.extend_from_slice(&self.ec);
        out
    }
}
