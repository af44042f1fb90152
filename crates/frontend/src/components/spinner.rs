use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpinnerSize {
    #[default]
    Medium,
    Large,
}

impl SpinnerSize {
    const fn classes(self) -> &'static str {
        match self {
            Self::Medium => "w-8 h-8 border-4",
            Self::Large => "w-12 h-12 border-4",
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct SpinnerProps {
    #[prop_or_default]
    pub size: SpinnerSize,
    /// Shown beside the spinner, announced to screen readers
    #[prop_or_default]
    pub label: Option<AttrValue>,
}

/// Spinner with an optional label, laid out on one line
#[function_component(Spinner)]
pub fn spinner(props: &SpinnerProps) -> Html {
    html! {
        <div class="inline-flex items-center gap-3 text-gray-500" role="status">
            <span class={classes!("inline-block", "rounded-full", "animate-spin", "border-gray-200", "border-t-blue-500", props.size.classes())}></span>
            if let Some(label) = &props.label {
                <span class="text-sm">{label.clone()}</span>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_size_is_medium() {
        assert_eq!(SpinnerSize::default(), SpinnerSize::Medium);
        assert_ne!(SpinnerSize::Medium.classes(), SpinnerSize::Large.classes());
    }
}
