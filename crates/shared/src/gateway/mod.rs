mod http;

pub use self::http::HttpOrderGateway;
