use actix_cors::Cors;
use actix_web::{dev::Server, web::Data, App, HttpServer};
use auth_core::{AuthService, CredentialRecord, CredentialStore, TokenCodec};
use secrecy::ExposeSecret;
use std::{io::Error, net::TcpListener};
use tracing_actix_web::TracingLogger;

use crate::{
    configuration::Settings,
    routes::{health_check, login, me},
};

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(configuration: Settings) -> Result<Self, anyhow::Error> {
        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );
        let listener = TcpListener::bind(address).expect(&format!(
            "Failed to bind port {}",
            configuration.application.port
        ));
        let port = listener.local_addr().unwrap().port();

        let auth_service = build_auth_service(&configuration);
        let server = run(listener, auth_service).await?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), Error> {
        self.server.await
    }
}

/// Wires the credential store and token codec from configuration.
/// The store is fixed seed data; there is no registration flow.
fn build_auth_service(configuration: &Settings) -> AuthService {
    let store = CredentialStore::from_records([CredentialRecord::new("admin", "1234")]);
    let codec = TokenCodec::new(
        configuration.auth.secret.expose_secret(),
        configuration.auth.token_ttl(),
    );
    AuthService::new(store, codec)
}

async fn run(listener: TcpListener, auth_service: AuthService) -> Result<Server, anyhow::Error> {
    let auth_service = Data::new(auth_service);
    let server = HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            // .allowed_header(http::header::CONTENT_TYPE)
            .max_age(3600);
        App::new()
            // Logger middleware
            // Sent active-web log to log subscriber
            .wrap(TracingLogger::default())
            .wrap(cors)
            .service(health_check)
            .service(login)
            .service(me)
            .app_data(auth_service.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
