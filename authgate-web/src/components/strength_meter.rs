use shared::password::{PasswordAssessment, StrengthBand};
use yew::prelude::*;

/// Props of the [`StrengthMeter`] component.
#[derive(Properties, PartialEq)]
pub struct StrengthMeterProps {
    /// The current assessment, recomputed by the page on every keystroke.
    pub assessment: PasswordAssessment,
}

fn band_class(band: StrengthBand) -> &'static str {
    match band {
        StrengthBand::Weak => "strength-fill strength-weak",
        StrengthBand::Fair => "strength-fill strength-fair",
        StrengthBand::Strong => "strength-fill strength-strong",
    }
}

/// Password strength meter: a fill bar plus the five requirement lines with
/// met/unmet markers.
#[function_component(StrengthMeter)]
pub fn strength_meter(props: &StrengthMeterProps) -> Html {
    let assessment = &props.assessment;
    let width = format!("width: {}%", assessment.strength_percent());

    html! {
        <div class="password-strength-meter">
            <div class="strength-bar">
                <div class={band_class(assessment.band())} style={width}></div>
            </div>
            <div class="requirements-container">
                <h4>{ "Password Requirements:" }</h4>
                {
                    assessment.rules().iter().map(|&(rule, met)| {
                        let class = if met { "requirement-met" } else { "requirement-not-met" };
                        let marker = if met { "✓" } else { "✗" };
                        html! {
                            <div class={class}>
                                { format!("{marker} {}", rule.description()) }
                            </div>
                        }
                    }).collect::<Html>()
                }
            </div>
        </div>
    }
}
