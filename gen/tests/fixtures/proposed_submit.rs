/// A submit call that has been proposed but not yet resolved.
///
/// Status and result are fetched lazily on first access and
/// cached; subsequent calls return the cached value without
/// touching the transport. A fetch that fails leaves the cache
/// empty so the call can be retried.
pub struct ProposedSubmit<T> {
    commit: Box<dyn chainapi_runtime::PendingCommit>,
    codec: chainapi_runtime::JsonCodec,
    status: std::sync::OnceLock<chainapi_runtime::CommitStatus>,
    response: std::sync::OnceLock<Response<T>>,
    fill_lock: std::sync::Mutex<()>,
}

#[allow(non_snake_case)]
impl<T: serde::de::DeserializeOwned> ProposedSubmit<T> {
    /// Wraps a pending commit and the codec used to decode its
    /// eventual result.
    pub fn new(
        commit: Box<dyn chainapi_runtime::PendingCommit>,
        codec: chainapi_runtime::JsonCodec,
    ) -> Self {
        Self {
            commit,
            codec,
            status: std::sync::OnceLock::new(),
            response: std::sync::OnceLock::new(),
            fill_lock: std::sync::Mutex::new(()),
        }
    }

    /// Blocks until the commit status is known, caching it.
    pub fn blockingGetStatus(
        &self,
    ) -> Result<&chainapi_runtime::CommitStatus, chainapi_runtime::ClientError> {
        if let Some(status) = self.status.get() {
            return Ok(status);
        }
        let _guard = self
            .fill_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(status) = self.status.get() {
            return Ok(status);
        }
        let fetched = self.commit.status()?;
        Ok(self.status.get_or_init(|| fetched))
    }

    /// Blocks until the decoded response envelope is available,
    /// caching it.
    pub fn blockingGetResult(&self) -> Result<&Response<T>, chainapi_runtime::ClientError> {
        if let Some(response) = self.response.get() {
            return Ok(response);
        }
        let _guard = self
            .fill_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(response) = self.response.get() {
            return Ok(response);
        }
        let raw = self.commit.result()?;
        let decoded: Response<T> = self.codec.decode(&raw)?;
        Ok(self.response.get_or_init(|| decoded))
    }
}
