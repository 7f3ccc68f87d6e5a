use common::images::card_image_url;
use common::model::school::SchoolSummary;
use yew::{html, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct SchoolCardProps {
    pub school: SchoolSummary,
}

/// One tile of the gallery: image, name, address and "city, state".
pub struct SchoolCard;

impl Component for SchoolCard {
    type Message = ();
    type Properties = SchoolCardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        SchoolCard
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let school = &ctx.props().school;
        html! {
            <article class="school-card">
                <div class="school-card__image">
                    <img
                        src={card_image_url(&school.image)}
                        alt={school.name.clone()}
                        width="400"
                        height="250"
                        loading="lazy"
                    />
                </div>
                <div class="school-card__body">
                    <h3>{ school.name.clone() }</h3>
                    <p class="school-card__address">{"📍 "}{ school.address.clone() }</p>
                </div>
                <div class="school-card__footer">
                    { format!("{}, {}", school.city, school.state) }
                </div>
            </article>
        }
    }
}
