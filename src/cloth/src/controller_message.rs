#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControllerMessage {
	TogglePause,
	FrameForward,
	Reset,
}
