// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use std::rc::Rc;
    use std::time::Duration;

    use api::config::ApiConfig;
    use api::slot::KeyValueSlot;
    use api::slot::MemorySlot;
    use dioxus_logger::tracing::warn;

    pub async fn sleep(duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }

    /// `window.localStorage`.
    struct BrowserSlot {
        storage: web_sys::Storage,
    }

    impl KeyValueSlot for BrowserSlot {
        fn get(&self, key: &str) -> Option<String> {
            self.storage.get_item(key).ok().flatten()
        }

        fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
            self.storage
                .set_item(key, value)
                .map_err(|e| anyhow::anyhow!("localStorage rejected {key}: {e:?}"))
        }
    }

    /// The browser's local storage, or a throwaway slot when it is disabled
    /// (private browsing, sandboxed iframes).
    pub fn local_slot(_config: &ApiConfig) -> Rc<dyn KeyValueSlot> {
        match web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            Some(storage) => Rc::new(BrowserSlot { storage }),
            None => {
                warn!("localStorage unavailable, preferences will not persist");
                Rc::new(MemorySlot::new())
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use std::rc::Rc;
    use std::time::Duration;

    use api::config::ApiConfig;
    use api::slot::FileSlot;
    use api::slot::KeyValueSlot;

    pub async fn sleep(duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    /// A JSON file in the configured data directory.
    pub fn local_slot(config: &ApiConfig) -> Rc<dyn KeyValueSlot> {
        Rc::new(FileSlot::new(config.data_dir.clone()))
    }
}
