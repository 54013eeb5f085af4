use image::DynamicImage;
use serde::{Deserialize, Serialize};

use super::DISCLAIMER;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorAnalysis {
    pub color: String,
    pub explanation: String,
}

/// Per-channel mean over all pixels, the dominant-color proxy fed to
/// `classify_color`.
pub fn average_rgb(img: &DynamicImage) -> (u8, u8, u8) {
    let rgb = img.to_rgb8();
    let mut sums = [0u64; 3];
    for pixel in rgb.pixels() {
        sums[0] += u64::from(pixel[0]);
        sums[1] += u64::from(pixel[1]);
        sums[2] += u64::from(pixel[2]);
    }
    let count = (u64::from(rgb.width()) * u64::from(rgb.height())).max(1);
    (
        (sums[0] / count) as u8,
        (sums[1] / count) as u8,
        (sums[2] / count) as u8,
    )
}

/// Ordered threshold tests over the dominant color, first match wins.
pub fn classify_color(r: u8, g: u8, b: u8) -> ColorAnalysis {
    let (color, explanation) = if r > 150 && g < 100 && b < 100 {
        (
            "bright red".to_string(),
            "Bright red usually indicates fresh blood and a steady flow. This is common and normal.",
        )
    } else if r > 80 && r <= 150 && g < 80 && b < 80 {
        (
            "dark red".to_string(),
            "Dark red is older blood. Often seen at the beginning or end of your cycle. It is completely normal.",
        )
    } else if r > g && g > b && r < 150 {
        (
            "brown".to_string(),
            "Brown is very old blood that took extra time to leave the uterus. Typically normal, especially at the start or end of your period.",
        )
    } else if r > 180 && g > 150 && b > 150 {
        (
            "pale".to_string(),
            "Pale or pink blood might be diluted with cervical fluid, which can be normal, particularly during light flow.",
        )
    } else {
        (
            format!("rgb({r},{g},{b})"),
            "The color varies. If you notice unusual changes in flow color, consistency, or smell, consult a healthcare provider.",
        )
    };

    ColorAnalysis {
        color,
        explanation: format!("{explanation} {DISCLAIMER}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bright_red_range() {
        assert_eq!(classify_color(200, 50, 50).color, "bright red");
    }

    #[test]
    fn dark_red_range() {
        assert_eq!(classify_color(120, 60, 60).color, "dark red");
        // Boundary: r must exceed 80.
        assert_ne!(classify_color(80, 60, 60).color, "dark red");
    }

    #[test]
    fn brown_requires_descending_channels_below_150() {
        assert_eq!(classify_color(140, 100, 50).color, "brown");
        // Same ordering but r >= 150 falls through.
        assert_ne!(classify_color(150, 100, 50).color, "brown");
    }

    #[test]
    fn pale_range() {
        assert_eq!(classify_color(200, 170, 170).color, "pale");
    }

    #[test]
    fn unmatched_color_gets_literal_rgb_label() {
        let result = classify_color(0, 0, 0);
        assert_eq!(result.color, "rgb(0,0,0)");
        assert!(result.explanation.contains("consult a healthcare provider"));
    }

    #[test]
    fn disclaimer_appended_on_every_branch() {
        for (r, g, b) in [(200, 50, 50), (120, 60, 60), (140, 100, 50), (200, 170, 170), (0, 0, 0)] {
            assert!(classify_color(r, g, b).explanation.ends_with(DISCLAIMER));
        }
    }

    #[test]
    fn average_rgb_of_flat_image_is_exact() {
        let img = DynamicImage::ImageRgb8(image::RgbImage::from_pixel(
            8,
            8,
            image::Rgb([200, 50, 50]),
        ));
        assert_eq!(average_rgb(&img), (200, 50, 50));
    }

    #[test]
    fn average_rgb_mixes_pixels() {
        let mut buf = image::RgbImage::new(2, 1);
        buf.put_pixel(0, 0, image::Rgb([100, 0, 0]));
        buf.put_pixel(1, 0, image::Rgb([200, 0, 0]));
        assert_eq!(average_rgb(&DynamicImage::ImageRgb8(buf)), (150, 0, 0));
    }
}
