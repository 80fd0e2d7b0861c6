use serde::Serialize;

/// UI language selected per request. Unknown codes fall back to English.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    En,
    Ar,
}

impl Lang {
    pub fn from_code(code: &str) -> Lang {
        match code.trim().to_ascii_lowercase().as_str() {
            "ar" => Lang::Ar,
            _ => Lang::En,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Ar => "ar",
        }
    }

    /// Text direction for the `<html dir=...>` attribute.
    pub fn dir(self) -> &'static str {
        match self {
            Lang::En => "ltr",
            Lang::Ar => "rtl",
        }
    }

    pub fn strings(self) -> &'static UiStrings {
        match self {
            Lang::En => &EN,
            Lang::Ar => &AR,
        }
    }
}

/// Flat table of UI strings. Pure data; one const per supported language.
#[derive(Debug, Serialize)]
pub struct UiStrings {
    pub home: &'static str,
    pub portfolio: &'static str,
    pub partners: &'static str,
    pub contact: &'static str,
    pub about: &'static str,
    pub our: &'static str,
    pub all: &'static str,
    pub our_portfolio: &'static str,
    pub portfolio_description: &'static str,
    pub our_partners: &'static str,
    pub partners_description: &'static str,
    pub contact_us: &'static str,
    pub contact_description: &'static str,
    pub get_in_touch: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub message: &'static str,
    pub your_name: &'static str,
    pub your_email: &'static str,
    pub your_message: &'static str,
    pub send_message: &'static str,
    pub sending: &'static str,
    pub message_sent_success: &'static str,
    pub message_sent_description: &'static str,
    pub visit_website: &'static str,
    pub about_us: &'static str,
    pub about_description1: &'static str,
    pub about_description2: &'static str,
    pub innovation: &'static str,
    pub innovation_description: &'static str,
    pub expertise: &'static str,
    pub expertise_description: &'static str,
    pub quality: &'static str,
    pub quality_description: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
    pub scroll_down: &'static str,
    pub start_your_digital_project: &'static str,
    pub contact_now: &'static str,
    pub welcome_message: &'static str,
}

pub static EN: UiStrings = UiStrings {
    home: "Home",
    portfolio: "Portfolio",
    partners: "Partners",
    contact: "Contact",
    about: "About",
    our: "Our",
    all: "All",
    our_portfolio: "Our Portfolio",
    portfolio_description: "Explore our cutting-edge projects showcasing the future of digital experiences. From immersive web applications to advanced AI systems, we push the boundaries of what's possible.",
    our_partners: "Our Partners",
    partners_description: "Meet the innovative companies we're proud to collaborate with to create groundbreaking digital solutions.",
    contact_us: "Contact Us",
    contact_description: "Get in touch with our team to discuss your project ideas or learn more about our services.",
    get_in_touch: "Get In Touch",
    name: "Name",
    email: "Email",
    message: "Message",
    your_name: "Your Name",
    your_email: "Your Email",
    your_message: "Your Message",
    send_message: "Send Message",
    sending: "Sending...",
    message_sent_success: "Message sent successfully!",
    message_sent_description: "We will get back to you shortly.",
    visit_website: "Visit Website",
    about_us: "About Us",
    about_description1: "We are a forward-thinking digital agency focused on creating innovative solutions that help businesses thrive in the digital era.",
    about_description2: "With our team of experts, we deliver cutting-edge technology solutions tailored to meet the unique needs of each client.",
    innovation: "Innovation",
    innovation_description: "We push the boundaries of what's possible with technology.",
    expertise: "Expertise",
    expertise_description: "Our team brings years of experience across various industries.",
    quality: "Quality",
    quality_description: "We ensure the highest standards in everything we create.",
    phone: "Phone",
    location: "Location",
    scroll_down: "Scroll Down",
    start_your_digital_project: "Start your digital project with ease",
    contact_now: "Contact Now",
    welcome_message: "I'm here to design a distinctive website for you at reasonable prices with professional services tailored to your needs.",
};

pub static AR: UiStrings = UiStrings {
    home: "الرئيسية",
    portfolio: "المعرض",
    partners: "الشركاء",
    contact: "اتصل بنا",
    about: "عن الشركة",
    our: "لدينا",
    all: "الكل",
    our_portfolio: "معرض أعمالنا",
    portfolio_description: "استكشف مشاريعنا المتطورة التي تعرض مستقبل التجارب الرقمية. من تطبيقات الويب الغامرة إلى أنظمة الذكاء الاصطناعي المتقدمة، نحن نتخطى حدود الممكن.",
    our_partners: "شركاؤنا",
    partners_description: "تعرف على الشركات المبتكرة التي نفتخر بالتعاون معها لإنشاء حلول رقمية رائدة.",
    contact_us: "اتصل بنا",
    contact_description: "تواصل مع فريقنا لمناقشة أفكار مشروعك أو معرفة المزيد عن خدماتنا.",
    get_in_touch: "تواصل معنا",
    name: "الاسم",
    email: "البريد الإلكتروني",
    message: "الرسالة",
    your_name: "اسمك",
    your_email: "بريدك الإلكتروني",
    your_message: "رسالتك",
    send_message: "إرسال الرسالة",
    sending: "جاري الإرسال...",
    message_sent_success: "تم إرسال الرسالة بنجاح!",
    message_sent_description: "سنعاود الاتصال بك قريبًا.",
    visit_website: "زيارة الموقع",
    about_us: "من نحن",
    about_description1: "نحن وكالة رقمية تتطلع إلى المستقبل وتركز على إنشاء حلول مبتكرة تساعد الشركات على الازدهار في العصر الرقمي.",
    about_description2: "مع فريقنا من الخبراء، نقدم حلولاً تكنولوجية متطورة مصممة خصيصاً لتلبية الاحتياجات الفريدة لكل عميل.",
    innovation: "الابتكار",
    innovation_description: "نحن نتخطى حدود ما هو ممكن مع التكنولوجيا.",
    expertise: "الخبرة",
    expertise_description: "يجلب فريقنا سنوات من الخبرة عبر مختلف الصناعات.",
    quality: "الجودة",
    quality_description: "نضمن أعلى المعايير في كل ما نبتكر.",
    phone: "الهاتف",
    location: "الموقع",
    scroll_down: "انتقل للأسفل",
    start_your_digital_project: "ابدأ مشروعك الرقمي بسهولة",
    contact_now: "تواصل الآن",
    welcome_message: "أنا هنا لأصمم لك موقعًا إلكترونيًا مميزًا بأسعار مناسبة وخدمات احترافية تناسب احتياجاتك.",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_codes_fall_back_to_english() {
        assert_eq!(Lang::from_code("de"), Lang::En);
        assert_eq!(Lang::from_code(""), Lang::En);
        assert_eq!(Lang::from_code(" AR "), Lang::Ar);
    }

    #[test]
    fn arabic_renders_right_to_left() {
        assert_eq!(Lang::Ar.dir(), "rtl");
        assert_eq!(Lang::En.dir(), "ltr");
        assert_eq!(Lang::Ar.strings().all, "الكل");
        assert_eq!(Lang::En.strings().all, "All");
    }
}
