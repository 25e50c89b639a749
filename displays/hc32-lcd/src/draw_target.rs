//! `embedded-graphics` integration

use core::convert::Infallible;

use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use hc32_hal::{DelayMs, LcdBus};

use crate::color::Color;
use crate::driver::Lcd;

impl From<Rgb565> for Color {
    fn from(color: Rgb565) -> Self {
        Self(color.into_storage())
    }
}

impl From<Color> for Rgb565 {
    fn from(color: Color) -> Self {
        RawU16::new(color.raw()).into()
    }
}

impl<B: LcdBus, D: DelayMs> OriginDimensions for Lcd<B, D> {
    fn size(&self) -> Size {
        Size::new(self.width().into(), self.height().into())
    }
}

impl<B: LcdBus, D: DelayMs> DrawTarget for Lcd<B, D> {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let (width, height) = (self.width(), self.height());

        for Pixel(coord, color) in pixels {
            // Out of bounds pixels are dropped
            let (Ok(x), Ok(y)) = (u16::try_from(coord.x), u16::try_from(coord.y)) else {
                continue;
            };
            if x < width && y < height {
                self.write_pixel(x, y, color.into());
            }
        }

        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        if area.size.width == 0 || area.size.height == 0 {
            return Ok(());
        }

        // Clipped to the panel, so every coordinate fits in u16
        self.fill_rect(
            area.top_left.x as u16,
            area.top_left.y as u16,
            area.size.width as u16,
            area.size.height as u16,
            color.into(),
        );
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        Lcd::clear(self, color.into());
        Ok(())
    }
}
