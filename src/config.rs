/// prefix joined to the input file name to form the artifact name
pub const OUTPUT_PREFIX: &str = "encoded_";

/// port the artifact binds when `PORT` is not set
pub const DEFAULT_PORT: u16 = 5000;

/// opening marker of the embedded literal inside an artifact
pub const LITERAL_START: &str = "exec((_)(b'";

/// closing marker of the embedded literal inside an artifact
pub const LITERAL_END: &str = "'))";

/// type tag of a bytes blob
pub const BLOB_TAG: u8 = b's';

/// flag bit a blob producer may set on the tag for shared objects
pub const BLOB_REF_FLAG: u8 = 0x80;
