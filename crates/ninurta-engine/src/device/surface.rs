/// What to do after the swapchain image could not be acquired.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceFault {
    /// Surface went stale; it has been reconfigured, try again next frame.
    Reconfigure,
    /// Drop this frame and carry on.
    Skip,
    /// Out of memory. Shut down.
    Fatal,
}

impl From<&wgpu::SurfaceError> for SurfaceFault {
    fn from(err: &wgpu::SurfaceError) -> Self {
        match err {
            wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => SurfaceFault::Reconfigure,
            wgpu::SurfaceError::OutOfMemory => SurfaceFault::Fatal,
            wgpu::SurfaceError::Timeout | wgpu::SurfaceError::Other => SurfaceFault::Skip,
        }
    }
}

/// 8-bit BGRA/RGBA in the requested color space, else whatever comes first.
pub(crate) fn pick_format(
    formats: &[wgpu::TextureFormat],
    srgb: bool,
) -> Option<wgpu::TextureFormat> {
    use wgpu::TextureFormat as F;

    let wanted: [F; 2] = if srgb {
        [F::Bgra8UnormSrgb, F::Rgba8UnormSrgb]
    } else {
        [F::Bgra8Unorm, F::Rgba8Unorm]
    };

    wanted
        .into_iter()
        .find(|f| formats.contains(f))
        .or_else(|| formats.first().copied())
}

/// Opaque when offered; the window has nothing to blend with.
pub(crate) fn pick_alpha_mode(modes: &[wgpu::CompositeAlphaMode]) -> wgpu::CompositeAlphaMode {
    if modes.contains(&wgpu::CompositeAlphaMode::Opaque) {
        wgpu::CompositeAlphaMode::Opaque
    } else {
        modes.first().copied().unwrap_or(wgpu::CompositeAlphaMode::Auto)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgpu::TextureFormat as F;

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn srgb_requested() {
        assert_eq!(pick_format(&[F::Bgra8Unorm, F::Bgra8UnormSrgb], true), Some(F::Bgra8UnormSrgb));
    }

    #[test]
    fn linear_requested() {
        assert_eq!(pick_format(&[F::Bgra8UnormSrgb, F::Rgba8Unorm], false), Some(F::Rgba8Unorm));
    }

    #[test]
    fn unknown_formats_fall_back_to_first() {
        assert_eq!(pick_format(&[F::Rgb10a2Unorm, F::Rgba16Float], false), Some(F::Rgb10a2Unorm));
        assert_eq!(pick_format(&[], true), None);
    }

    // ── alpha ─────────────────────────────────────────────────────────────

    #[test]
    fn opaque_wins_when_offered() {
        let modes = [wgpu::CompositeAlphaMode::PreMultiplied, wgpu::CompositeAlphaMode::Opaque];
        assert_eq!(pick_alpha_mode(&modes), wgpu::CompositeAlphaMode::Opaque);
    }

    #[test]
    fn alpha_falls_back_to_first_then_auto() {
        assert_eq!(
            pick_alpha_mode(&[wgpu::CompositeAlphaMode::PostMultiplied]),
            wgpu::CompositeAlphaMode::PostMultiplied
        );
        assert_eq!(pick_alpha_mode(&[]), wgpu::CompositeAlphaMode::Auto);
    }

    // ── faults ────────────────────────────────────────────────────────────

    #[test]
    fn stale_surface_is_reconfigured() {
        assert_eq!(SurfaceFault::from(&wgpu::SurfaceError::Lost), SurfaceFault::Reconfigure);
        assert_eq!(SurfaceFault::from(&wgpu::SurfaceError::Outdated), SurfaceFault::Reconfigure);
    }

    #[test]
    fn timeout_skips_and_oom_is_fatal() {
        assert_eq!(SurfaceFault::from(&wgpu::SurfaceError::Timeout), SurfaceFault::Skip);
        assert_eq!(SurfaceFault::from(&wgpu::SurfaceError::OutOfMemory), SurfaceFault::Fatal);
    }
}
