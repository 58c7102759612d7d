mod ping;

pub use ping::PingHandler;
