use leptos::prelude::*;

use crate::layout::aurora::AuroraBackground;
use crate::layout::footer::Footer;
use crate::shared::document::set_title;
use crate::usecases::u501_submit_contact::view::ContactForm;

#[component]
#[allow(non_snake_case)]
pub fn ContactPage() -> impl IntoView {
    Effect::new(move |_| set_title(Some("Contact")));

    view! {
        <AuroraBackground plain=true>
            <section class="page-hero">
                <h1 class="page-hero__title">"Get In " <span class="accent">"Touch"</span></h1>
                <p class="page-hero__lead">
                    "Ready to transform your space? Let's discuss your project and bring your vision to life."
                </p>
            </section>

            <section class="contact">
                <div class="contact__form">
                    <h2>"Send us a message"</h2>
                    <ContactForm />
                </div>
                <aside class="contact__info">
                    <h3>"Contact Information"</h3>
                    <p><a href="tel:+15551234567">"+1 (555) 123-4567"</a></p>
                    <p><a href="mailto:info@sivorydesign.com">"info@sivorydesign.com"</a></p>
                    <h3>"Business Hours"</h3>
                    <p>"Monday - Friday: 8:00 AM - 6:00 PM"</p>
                    <p>"Saturday: 9:00 AM - 4:00 PM"</p>
                </aside>
            </section>

            <Footer />
        </AuroraBackground>
    }
}
