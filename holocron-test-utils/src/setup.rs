use mockito::{Mock, Server, ServerGuard};

pub struct TestSetup {
    pub server: ServerGuard,
    pub mocks: Vec<Mock>,
    api_url: String,
}

impl TestSetup {
    /// Start a mock catalog server.
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let api_url = server.url();

        Self {
            server,
            mocks: Vec::new(),
            api_url,
        }
    }

    /// Base URL to hand to the client under test, without a trailing slash.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// Calls `assert()` on every mock stored in `mocks`.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
