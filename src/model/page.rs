//! Page-level types.

use super::{BoundingBox, Region};
use serde::{Deserialize, Serialize};

/// A single page in the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Page number (1-indexed)
    pub number: u32,

    /// Page width in points (1 point = 1/72 inch)
    pub width: f32,

    /// Page height in points
    pub height: f32,

    /// Page rotation in degrees (0, 90, 180, 270)
    #[serde(default)]
    pub rotation: u16,

    /// Images placed on the page
    #[serde(default)]
    pub images: Vec<Image>,

    /// Text regions in reading order
    #[serde(default)]
    pub regions: Vec<Region>,
}

impl Page {
    /// Create a new page with the given dimensions.
    pub fn new(number: u32, width: f32, height: f32) -> Self {
        Self {
            number,
            width,
            height,
            rotation: 0,
            images: Vec::new(),
            regions: Vec::new(),
        }
    }

    /// Create a new page with standard Letter size (8.5 x 11 inches).
    pub fn letter(number: u32) -> Self {
        Self::new(number, 612.0, 792.0) // 8.5 * 72, 11 * 72
    }

    /// Create a new page with standard A4 size (210 x 297 mm).
    pub fn a4(number: u32) -> Self {
        Self::new(number, 595.0, 842.0) // 210mm * 2.834, 297mm * 2.834
    }

    /// Add a text region to the page.
    pub fn add_region(&mut self, region: Region) {
        self.regions.push(region);
    }

    /// Add an image to the page.
    pub fn add_image(&mut self, image: Image) {
        self.images.push(image);
    }

    /// Builder form of [`Page::add_region`].
    pub fn with_region(mut self, region: Region) -> Self {
        self.add_region(region);
        self
    }

    /// Builder form of [`Page::add_image`].
    pub fn with_image(mut self, image: Image) -> Self {
        self.add_image(image);
        self
    }

    /// Check if the page has neither text regions nor images.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty() && self.images.is_empty()
    }

    /// Get page dimensions as (width, height) tuple.
    pub fn dimensions(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Check if the page is in landscape orientation.
    pub fn is_landscape(&self) -> bool {
        self.width > self.height
    }

    /// Page bounds in page coordinates.
    pub fn bbox(&self) -> BoundingBox {
        BoundingBox::new(0.0, 0.0, self.width as f64, self.height as f64)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::letter(1)
    }
}

/// An image placed on a page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Image {
    /// Placement on the page
    pub bbox: BoundingBox,

    /// Identifier of the image data in the source file
    #[serde(default)]
    pub resource_id: Option<String>,
}

impl Image {
    /// Create an image placement.
    pub fn new(bbox: BoundingBox) -> Self {
        Self {
            bbox,
            resource_id: None,
        }
    }

    /// Attach a resource identifier.
    pub fn with_resource(mut self, id: impl Into<String>) -> Self {
        self.resource_id = Some(id.into());
        self
    }
}
