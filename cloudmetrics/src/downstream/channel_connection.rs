use std::sync::Arc;

use hyper::Uri;
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use tokio_rustls::rustls::{
    client::danger::{HandshakeSignatureValid, ServerCertVerified, ServerCertVerifier},
    crypto::{aws_lc_rs, CryptoProvider},
    pki_types::{CertificateDer, ServerName, UnixTime},
    ClientConfig, DigitallySignedStruct, RootCertStore, SignatureScheme,
};

use super::StdError;

/// Type alias for internal channel type
pub type ChannelType = Client<HttpsConnector<HttpConnector>, tonic::body::BoxBody>;

/// The public web trust roots. What you want for `monitoring.googleapis.com`.
pub fn web_trust() -> Option<RootCertStore> {
    Some(RootCertStore {
        roots: webpki_roots::TLS_SERVER_ROOTS.to_vec(),
    })
}

/// Build an http2 client for `endpoint` and hand it to `with_origin`, which is
/// usually `MetricServiceClient::with_origin`.
///
/// `endpoint` carries the scheme and authority the generated client writes into
/// every request, e.g. `https://monitoring.googleapis.com`.
///
/// Pass [`web_trust`] as `tls_trust` to talk to Cloud Monitoring. You can make an
/// insecure connection, for a local emulator, by passing `|| None`.
pub fn get_client<TrustFunction, WithOrigin, U>(
    endpoint: &str,
    tls_trust: TrustFunction,
    with_origin: WithOrigin,
) -> Result<U, StdError>
where
    TrustFunction: FnOnce() -> Option<RootCertStore>,
    WithOrigin: Fn(ChannelType, Uri) -> U,
{
    let origin: Uri = endpoint.parse()?;
    let tls = match tls_trust() {
        Some(roots) => verified_tls(roots)?,
        None => {
            log::warn!("connecting to {endpoint} without verifying its certificate");
            unverified_tls()?
        }
    };
    let client = Client::builder(TokioExecutor::new())
        .http2_only(true)
        .build(tls_connector(tls));
    Ok(with_origin(client, origin))
}

fn verified_tls(roots: RootCertStore) -> Result<ClientConfig, StdError> {
    Ok(ClientConfig::builder_with_provider(Arc::new(aws_lc_rs::default_provider()))
        .with_safe_default_protocol_versions()?
        .with_root_certificates(roots)
        .with_no_client_auth())
}

fn unverified_tls() -> Result<ClientConfig, StdError> {
    let provider = Arc::new(aws_lc_rs::default_provider());
    let mut tls = ClientConfig::builder_with_provider(provider.clone())
        .with_safe_default_protocol_versions()?
        .with_root_certificates(RootCertStore::empty())
        .with_no_client_auth();
    tls.dangerous()
        .set_certificate_verifier(Arc::new(UnverifiedServer { provider }));
    Ok(tls)
}

/// TLS when the endpoint says `https`, plaintext h2 for an `http` emulator.
fn tls_connector(tls: ClientConfig) -> HttpsConnector<HttpConnector> {
    let mut tcp = HttpConnector::new();
    tcp.enforce_http(false);
    tcp.set_nodelay(true);
    HttpsConnectorBuilder::new()
        .with_tls_config(tls)
        .https_or_http()
        .enable_http2()
        .wrap_connector(tcp)
}

/// Accepts any certificate. Signatures are still checked against the provider's schemes.
#[derive(Debug)]
struct UnverifiedServer {
    provider: Arc<CryptoProvider>,
}

impl ServerCertVerifier for UnverifiedServer {
    fn verify_server_cert(
        &self,
        _end_entity: &CertificateDer<'_>,
        _intermediates: &[CertificateDer<'_>],
        _server_name: &ServerName<'_>,
        _ocsp_response: &[u8],
        _now: UnixTime,
    ) -> Result<ServerCertVerified, tokio_rustls::rustls::Error> {
        Ok(ServerCertVerified::assertion())
    }

    fn verify_tls12_signature(
        &self,
        _message: &[u8],
        _cert: &CertificateDer<'_>,
        _dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, tokio_rustls::rustls::Error> {
        Ok(HandshakeSignatureValid::assertion())
    }

    fn verify_tls13_signature(
        &self,
        _message: &[u8],
        _cert: &CertificateDer<'_>,
        _dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, tokio_rustls::rustls::Error> {
        Ok(HandshakeSignatureValid::assertion())
    }

    fn supported_verify_schemes(&self) -> Vec<SignatureScheme> {
        self.provider
            .signature_verification_algorithms
            .supported_schemes()
    }
}
