//! Permission gate checked before any window service call that needs the
//! privileged capability.

use tracing::debug;

use crate::{
    error::{Result, SwapError},
    service::WindowService,
};

/// Succeed when the service already holds privileged access.
///
/// Otherwise request access once (which may show a system prompt) and fail
/// with [`SwapError::PermissionDenied`]; the grant only takes effect on a
/// later run.
pub fn ensure_access<S>(service: &S) -> Result<()>
where
    S: WindowService + ?Sized,
{
    if service.has_privileged_access() {
        return Ok(());
    }
    debug!("privileged access missing; requesting");
    service.request_privileged_access();
    Err(SwapError::PermissionDenied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::FakeWindowService;

    #[test]
    fn granted_access_passes_without_prompt() {
        let svc = FakeWindowService::new();
        assert_eq!(ensure_access(&svc), Ok(()));
        assert_eq!(svc.access_requests(), 0);
    }

    #[test]
    fn missing_access_prompts_once_and_fails() {
        let svc = FakeWindowService::new();
        svc.set_access(false);
        assert_eq!(ensure_access(&svc), Err(SwapError::PermissionDenied));
        assert_eq!(svc.access_requests(), 1);
    }
}
