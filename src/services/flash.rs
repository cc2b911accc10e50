use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

/// 提示消息默认保留 30 分钟
pub const DEFAULT_FLASH_TTL: Duration = Duration::from_secs(30 * 60);

/// 过期清理间隔
pub const FLASH_CLEANUP_INTERVAL: Duration = Duration::from_secs(5 * 60);

#[derive(Debug, Clone)]
struct FlashEntry {
    message: String,
    stored_at: Instant,
}

impl FlashEntry {
    fn is_expired(&self, ttl: Duration) -> bool {
        self.stored_at.elapsed() > ttl
    }
}

/// 会话级提示消息存储
///
/// 每个会话最多保存一条消息，读取即清除。
#[derive(Debug, Clone)]
pub struct FlashStore {
    entries: Arc<RwLock<HashMap<String, FlashEntry>>>,
    ttl: Duration,
}

impl FlashStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// 写入消息，覆盖同一会话的旧消息
    pub fn put(&self, session_id: &str, message: impl Into<String>) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(
                session_id.to_string(),
                FlashEntry {
                    message: message.into(),
                    stored_at: Instant::now(),
                },
            );
        }
    }

    /// 取出并清除消息
    pub fn take(&self, session_id: &str) -> Option<String> {
        let entry = self.entries.write().ok()?.remove(session_id)?;
        if entry.is_expired(self.ttl) {
            None
        } else {
            Some(entry.message)
        }
    }

    pub fn cleanup_expired(&self) {
        if let Ok(mut entries) = self.entries.write() {
            let ttl = self.ttl;
            entries.retain(|_, entry| !entry.is_expired(ttl));
        }
    }

    pub fn size(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }
}

impl Default for FlashStore {
    fn default() -> Self {
        Self::new(DEFAULT_FLASH_TTL)
    }
}

/// 提示消息清理任务
pub struct FlashCleanupTask {
    store: FlashStore,
    interval: Duration,
}

impl FlashCleanupTask {
    pub fn new(store: FlashStore, interval: Duration) -> Self {
        Self { store, interval }
    }

    /// 启动定期清理任务
    pub async fn start(self) {
        let mut interval = tokio::time::interval(self.interval);

        loop {
            interval.tick().await;
            self.store.cleanup_expired();
            tracing::debug!("Flash cleanup completed. Pending messages: {}", self.store.size());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_take_consumes_message_once() {
        let store = FlashStore::default();
        store.put("s1", "Movie successfully added");

        assert_eq!(store.take("s1"), Some("Movie successfully added".to_string()));
        assert_eq!(store.take("s1"), None);
    }

    #[test]
    fn test_single_message_per_session() {
        let store = FlashStore::default();
        store.put("s1", "first");
        store.put("s1", "second");

        assert_eq!(store.size(), 1);
        assert_eq!(store.take("s1"), Some("second".to_string()));
    }

    #[test]
    fn test_sessions_are_isolated() {
        let store = FlashStore::default();
        store.put("s1", "for s1");
        store.put("s2", "for s2");

        assert_eq!(store.take("s2"), Some("for s2".to_string()));
        assert_eq!(store.take("s1"), Some("for s1".to_string()));
        assert_eq!(store.take("s3"), None);
    }

    #[test]
    fn test_expired_message_is_dropped() {
        let store = FlashStore::new(Duration::from_millis(50));
        store.put("s1", "stale");
        store.put("s2", "stale too");

        thread::sleep(Duration::from_millis(100));
        assert_eq!(store.take("s1"), None);

        store.cleanup_expired();
        assert_eq!(store.size(), 0);
    }
}
