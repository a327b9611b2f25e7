use std::fmt;
use std::str::FromStr;

use crate::error::TravelMapError;

/// User input the popup reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PopupEvent {
    ResetView,
    PreviousSlide,
    NextSlide,
    Close,
    Thumbnail(usize),
    Escape,
    MainImageClicked,
    ReadMore,
}

impl fmt::Display for PopupEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ResetView => write!(f, "reset"),
            Self::PreviousSlide => write!(f, "prev"),
            Self::NextSlide => write!(f, "next"),
            Self::Close => write!(f, "close"),
            Self::Thumbnail(i) => write!(f, "thumb:{i}"),
            Self::Escape => write!(f, "escape"),
            Self::MainImageClicked => write!(f, "focus"),
            Self::ReadMore => write!(f, "read-more"),
        }
    }
}

impl FromStr for PopupEvent {
    type Err = TravelMapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_lowercase();
        let event = match token.as_str() {
            "reset" => Self::ResetView,
            "prev" | "previous" => Self::PreviousSlide,
            "next" => Self::NextSlide,
            "close" => Self::Close,
            "escape" | "esc" => Self::Escape,
            "focus" | "image" => Self::MainImageClicked,
            "read-more" | "more" => Self::ReadMore,
            other => {
                let index = other
                    .strip_prefix("thumb:")
                    .and_then(|i| i.parse().ok())
                    .ok_or_else(|| TravelMapError::InvalidEvent(s.to_string()))?;
                Self::Thumbnail(index)
            }
        };
        Ok(event)
    }
}

/// Parse a comma-separated event list such as `next,next,thumb:2,close`.
pub fn parse_event_list(list: &str) -> Result<Vec<PopupEvent>, TravelMapError> {
    list.split(',')
        .filter(|t| !t.trim().is_empty())
        .map(str::parse)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_output_parses_back() {
        for event in [
            PopupEvent::ResetView,
            PopupEvent::PreviousSlide,
            PopupEvent::NextSlide,
            PopupEvent::Close,
            PopupEvent::Thumbnail(3),
            PopupEvent::Escape,
            PopupEvent::MainImageClicked,
            PopupEvent::ReadMore,
        ] {
            assert_eq!(event.to_string().parse::<PopupEvent>().unwrap(), event);
        }
    }

    #[test]
    fn unknown_token_is_rejected() {
        assert!(matches!(
            "jump".parse::<PopupEvent>(),
            Err(TravelMapError::InvalidEvent(_))
        ));
        assert!("thumb:x".parse::<PopupEvent>().is_err());
    }

    #[test]
    fn event_list_skips_blank_entries() {
        let events = parse_event_list("next, next,,close").unwrap();
        assert_eq!(
            events,
            vec![PopupEvent::NextSlide, PopupEvent::NextSlide, PopupEvent::Close]
        );
    }
}
