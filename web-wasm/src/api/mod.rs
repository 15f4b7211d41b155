mod verify;

pub use verify::FetchVerificationClient;
