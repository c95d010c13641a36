/// A percentage split into five star slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRating {
    pub full: u32,
    pub half: bool,
}

impl StarRating {
    pub const SLOTS: u32 = 5;

    /// `full = (p / 10) / 2` with integer tens; an odd tens digit adds a half
    /// star. Percentages above 100 are clamped.
    pub fn from_percentage(percentage: u32) -> Self {
        let tens = percentage.min(100) / 10;
        Self {
            full: tens / 2,
            half: tens % 2 == 1,
        }
    }

    pub fn empty(&self) -> u32 {
        Self::SLOTS - self.full - u32::from(self.half)
    }

    /// `★★★⯪☆` style text.
    pub fn to_text(&self) -> String {
        let mut stars = "★".repeat(self.full as usize);
        if self.half {
            stars.push('⯪');
        }
        stars.push_str(&"☆".repeat(self.empty() as usize));
        stars
    }

    /// The five-star widget markup.
    pub fn to_html(&self) -> String {
        let mut html = String::from("<div id=\"fivestar-widget\">");
        for _ in 0..self.full {
            html.push_str("<div class=\"star on\"></div>");
        }
        if self.half {
            html.push_str("<div class=\"star on-half\"></div>");
        }
        for _ in 0..self.empty() {
            html.push_str("<div class=\"star\"></div>");
        }
        html.push_str("</div>");
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_percentage() {
        assert_eq!(StarRating::from_percentage(0), StarRating { full: 0, half: false });
        assert_eq!(StarRating::from_percentage(17), StarRating { full: 0, half: true });
        assert_eq!(StarRating::from_percentage(57), StarRating { full: 2, half: true });
        assert_eq!(StarRating::from_percentage(86), StarRating { full: 4, half: false });
        assert_eq!(StarRating::from_percentage(100), StarRating { full: 5, half: false });
        assert_eq!(StarRating::from_percentage(250), StarRating { full: 5, half: false });
    }

    #[test]
    fn test_slots_always_five() {
        for percentage in 0..=100 {
            let rating = StarRating::from_percentage(percentage);
            assert_eq!(rating.full + u32::from(rating.half) + rating.empty(), 5);
        }
    }

    #[test]
    fn test_to_text() {
        assert_eq!(StarRating::from_percentage(71).to_text(), "★★★⯪☆");
        assert_eq!(StarRating::from_percentage(0).to_text(), "☆☆☆☆☆");
    }

    #[test]
    fn test_to_html() {
        let html = StarRating::from_percentage(33).to_html();
        assert_eq!(
            html,
            "<div id=\"fivestar-widget\">\
             <div class=\"star on\"></div><div class=\"star on-half\"></div>\
             <div class=\"star\"></div><div class=\"star\"></div><div class=\"star\"></div>\
             </div>"
        );
    }
}
