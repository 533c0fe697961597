use crate::Setup;

/// Runs a test body on its own current-thread runtime.
pub struct CascadeTest<S: Setup> {
    runtime: tokio::runtime::Runtime,
    setup: Option<S>,
}

impl<S: Setup> CascadeTest<S> {
    pub fn new(setup: S) -> Self {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("Failed to create Tokio runtime");

        Self {
            runtime,
            setup: Some(setup),
        }
    }

    pub fn run_test<F, Fut>(&mut self, test_fn: F)
    where
        F: FnOnce(S) -> Fut,
        Fut: std::future::Future<Output = ()>,
    {
        let setup = self.setup.take().expect("Setup already consumed");
        self.runtime.block_on(async {
            test_fn(setup).await;
        });
    }
}
