use crate::frame::FrameOutput;

/// Consumer of finished frames.
///
/// Called exactly once per frame, after recording has ended. The frame view
/// borrows the [`FrameContext`](crate::frame::FrameContext), so an
/// implementation must copy or upload what it needs before returning.
pub trait RenderBackend {
    fn submit_frame(&mut self, frame: &FrameOutput<'_>);
}

impl<B: RenderBackend + ?Sized> RenderBackend for &mut B {
    #[inline]
    fn submit_frame(&mut self, frame: &FrameOutput<'_>) {
        (**self).submit_frame(frame)
    }
}
