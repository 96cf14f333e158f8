//! Concrete implementations of the `azfd-common` ports.
//!
//! * [`dns::HickoryResolver`] answers CNAME queries through `hickory-resolver`.
//! * [`http::ReqwestTransport`] performs the HTTP(S) probes through `reqwest`.

pub mod dns;
pub mod http;
