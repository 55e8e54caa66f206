use once_cell::sync::Lazy;
use web::{
    configuration::get_configuration,
    startup::Application,
    telemetry::{get_subscriber, init_subscriber},
};

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub api_client: reqwest::Client,
    pub test_user: TestUser,
}

/// The credential pair seeded into the store at startup.
pub struct TestUser {
    pub username: String,
    pub password: String,
}

impl TestUser {
    pub fn seeded() -> Self {
        Self {
            username: "admin".into(),
            password: "1234".into(),
        }
    }
}

impl TestApp {
    pub async fn get_healthcheck(&self) -> reqwest::Response {
        self.api_client
            .get(&format!("{}/health_check", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_login(&self, username: &str, password: &str) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/login", &self.address))
            .form(&[("username", username), ("password", password)])
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_me(&self, token: &str) -> reqwest::Response {
        self.api_client
            .get(&format!("{}/me", &self.address))
            .bearer_auth(token)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_me_without_auth(&self) -> reqwest::Response {
        self.api_client
            .get(&format!("{}/me", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Logs the seeded user in and returns the issued access token.
    pub async fn login_test_user(&self) -> String {
        let response = self
            .post_login(&self.test_user.username, &self.test_user.password)
            .await;
        let body: serde_json::Value = response.json().await.expect("Failed to parse login body");
        body["access_token"]
            .as_str()
            .expect("Login response is missing access_token")
            .to_owned()
    }
}

pub async fn spawn_app() -> TestApp {
    // Singleton Pattern
    Lazy::force(&TRACING);

    let api_client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .cookie_store(true)
        .build()
        .unwrap();
    let configuration = {
        let mut c = get_configuration().expect("Failed to read configuration");
        // Wildcard port, the system will find available port
        c.application.port = 0;
        c
    };
    let app = Application::build(configuration.clone())
        .await
        .expect("Failed to build application");
    let port = app.port();
    let address = format!("http://127.0.0.1:{}", port);

    // Run the application
    let _ = tokio::spawn(app.run_until_stopped());
    TestApp {
        address,
        port,
        api_client,
        test_user: TestUser::seeded(),
    }
}
