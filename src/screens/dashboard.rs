use iced::widget::{button, column, container, row, text, Canvas, Space};
use iced::{Alignment, Color, Element, Fill, Length};

use crate::api::models::{ActivitySample, PerformanceMetric, SessionSample, UserProfile};
use crate::charts::{ActivityChart, PerformanceRadar, ScoreGauge, SessionChart};
use crate::message::Message;
use crate::state::LoadState;
use crate::theme;

const SQUARE_CHART_HEIGHT: f32 = 260.0;
const ACTIVITY_CHART_HEIGHT: f32 = 280.0;

pub fn view<'a>(
    user_id: u32,
    profile: &'a LoadState<UserProfile>,
    activity: &'a LoadState<Vec<ActivitySample>>,
    sessions: &'a LoadState<Vec<SessionSample>>,
    performance: &'a LoadState<Vec<PerformanceMetric>>,
) -> Element<'a, Message> {
    let activity_section = chart_section(activity, ACTIVITY_CHART_HEIGHT, |samples| {
        Canvas::new(ActivityChart::new(samples.clone()))
            .width(Fill)
            .height(ACTIVITY_CHART_HEIGHT)
            .into()
    });

    let sessions_section = chart_section(sessions, SQUARE_CHART_HEIGHT, |samples| {
        Canvas::new(SessionChart::new(samples.clone()))
            .width(Fill)
            .height(SQUARE_CHART_HEIGHT)
            .into()
    });

    let radar_section = chart_section(performance, SQUARE_CHART_HEIGHT, |metrics| {
        Canvas::new(PerformanceRadar::new(metrics.clone()))
            .width(Fill)
            .height(SQUARE_CHART_HEIGHT)
            .into()
    });

    let gauge_section = chart_section(profile, SQUARE_CHART_HEIGHT, |profile| {
        Canvas::new(ScoreGauge::new(profile.score))
            .width(Fill)
            .height(SQUARE_CHART_HEIGHT)
            .into()
    });

    let charts = column![
        activity_section,
        row![
            container(sessions_section).width(Length::FillPortion(1)),
            container(radar_section).width(Length::FillPortion(1)),
            container(gauge_section).width(Length::FillPortion(1)),
        ]
        .spacing(24),
    ]
    .spacing(24)
    .width(Fill);

    let content = column![
        header_view(user_id),
        greeting_view(profile),
        row![charts, nutrition_view(profile)].spacing(24),
    ]
    .spacing(24)
    .padding(24)
    .width(Fill);

    row![sidebar_view(), content].height(Fill).into()
}

fn header_view<'a>(user_id: u32) -> Element<'a, Message> {
    // Static nav chrome; only the user switch carries a message.
    let nav = row![
        text("SportSee").size(22).color(theme::PRIMARY_RED),
        Space::new().width(Length::Fixed(32.0)),
        text("Accueil").color(theme::TEXT_DARK),
        text("Profil").color(theme::TEXT_MUTED),
        text("Réglage").color(theme::TEXT_MUTED),
        text("Communauté").color(theme::TEXT_MUTED),
    ]
    .spacing(20)
    .align_y(Alignment::Center);

    let user_button = |label: &'a str, id: u32| {
        let style = if id == user_id {
            theme::accent_button_style
        } else {
            theme::muted_button_style
        };
        button(text(label).size(13))
            .on_press(Message::SelectUser(id))
            .style(style)
            .padding(8)
    };

    row![
        nav,
        Space::new().width(Fill),
        user_button("Utilisateur 12", 12),
        user_button("Utilisateur 18", 18),
    ]
    .spacing(8)
    .align_y(Alignment::Center)
    .into()
}

fn greeting_view<'a>(profile: &'a LoadState<UserProfile>) -> Element<'a, Message> {
    let name = profile
        .ready()
        .map(|profile| profile.first_name.as_str())
        .unwrap_or("");

    column![
        row![
            text("Bonjour ").size(30).color(theme::TEXT_DARK),
            text(name).size(30).color(theme::PRIMARY_RED),
        ],
        text("Félicitation ! Vous avez explosé vos objectifs hier 🎉")
            .size(15)
            .color(theme::TEXT_DARK),
    ]
    .spacing(8)
    .into()
}

fn sidebar_view<'a>() -> Element<'a, Message> {
    let tile = |glyph: &'a str| {
        container(text(glyph).size(20))
            .padding(12)
            .style(|_| iced::widget::container::background(Color::WHITE))
    };

    let content = column![
        Space::new().height(Fill),
        tile("🧘"),
        tile("🏊"),
        tile("🚴"),
        tile("🏋"),
        Space::new().height(Fill),
        text("Copyright, SportSee 2024")
            .size(10)
            .color(Color::WHITE),
    ]
    .spacing(16)
    .padding(16)
    .align_x(Alignment::Center)
    .width(Length::Fixed(96.0))
    .height(Fill);

    container(content)
        .style(|_| iced::widget::container::background(theme::SIDEBAR_BG))
        .into()
}

fn chart_section<'a, T>(
    state: &'a LoadState<T>,
    height: f32,
    chart: impl FnOnce(&'a T) -> Element<'a, Message>,
) -> Element<'a, Message> {
    match state {
        LoadState::Ready(value) => chart(value),
        LoadState::Loading => placeholder("Chargement...", height),
        LoadState::Failed(message) => placeholder(message, height),
    }
}

fn placeholder<'a>(message: &'a str, height: f32) -> Element<'a, Message> {
    container(text(message).size(14).color(theme::TEXT_MUTED))
        .width(Fill)
        .height(Length::Fixed(height))
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .style(iced::widget::container::bordered_box)
        .into()
}

fn nutrition_view<'a>(profile: &'a LoadState<UserProfile>) -> Element<'a, Message> {
    let content: Element<'a, Message> = match profile {
        LoadState::Loading => placeholder("Chargement...", SQUARE_CHART_HEIGHT),
        LoadState::Failed(message) => placeholder(message, SQUARE_CHART_HEIGHT),
        LoadState::Ready(profile) => {
            let key_data = &profile.key_data;
            column![
                nutrition_card(
                    format!("{}kCal", key_data.calorie_count),
                    "Calories",
                    theme::NUTRITION_CALORIES_BG,
                ),
                nutrition_card(
                    format!("{}g", key_data.protein_count),
                    "Protéines",
                    theme::NUTRITION_PROTEIN_BG,
                ),
                nutrition_card(
                    format!("{}g", key_data.carbohydrate_count),
                    "Glucides",
                    theme::NUTRITION_CARBS_BG,
                ),
                nutrition_card(
                    format!("{}g", key_data.lipid_count),
                    "Lipides",
                    theme::NUTRITION_LIPID_BG,
                ),
            ]
            .spacing(16)
            .into()
        }
    };

    container(content).width(Length::Fixed(220.0)).into()
}

fn nutrition_card<'a>(value: String, label: &'a str, icon_bg: Color) -> Element<'a, Message> {
    let icon = container(Space::new().width(Length::Fixed(24.0)).height(Length::Fixed(24.0)))
        .padding(12)
        .style(move |_| iced::widget::container::background(icon_bg));

    let body = column![
        text(value).size(18).color(theme::TEXT_DARK),
        text(label).size(13).color(theme::TEXT_MUTED),
    ]
    .spacing(4);

    container(
        row![icon, body]
            .spacing(16)
            .align_y(Alignment::Center),
    )
    .padding(20)
    .width(Fill)
    .style(|_| iced::widget::container::background(theme::CARD_LIGHT))
    .into()
}
