/// Operating platform reported by the host runtime. Read once at startup;
/// its only consumer is the all-windows-closed branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PlatformIdentity(&'static str);

/// The single carved-out exception: macOS convention keeps an application
/// resident with zero open windows until it is quit explicitly.
pub(crate) const RESIDENT_PLATFORM: PlatformIdentity = PlatformIdentity("macos");

impl PlatformIdentity {
    pub(crate) fn current() -> Self {
        Self(std::env::consts::OS)
    }

    pub(crate) const fn from_os_name(os_name: &'static str) -> Self {
        Self(os_name)
    }

    pub(crate) fn stays_resident_without_windows(self) -> bool {
        self == RESIDENT_PLATFORM
    }

    pub(crate) fn os_name(self) -> &'static str {
        self.0
    }
}
