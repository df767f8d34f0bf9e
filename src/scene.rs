//! Retained display list
//!
//! Static sprites and text nodes a state creates once and mutates in place.
//! Moving bodies (paddle, ball, bricks) are read straight from the play state
//! by whatever draws the frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Align {
    Left,
    #[default]
    Center,
    Right,
}

/// Font, fill color and alignment of a text node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub font: String,
    pub fill: String,
    pub align: Align,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::base()
    }
}

impl TextStyle {
    /// 30px white centered Arial
    pub fn base() -> Self {
        Self {
            font: "30px Arial".to_string(),
            fill: "#fff".to_string(),
            align: Align::Center,
        }
    }

    pub fn with_font(mut self, font: &str) -> Self {
        self.font = font.to_string();
        self
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextId(usize);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextNode {
    pub text: String,
    pub pos: Vec2,
    /// 0.0 = top-left, 0.5 = centered
    pub anchor: Vec2,
    pub style: TextStyle,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteNode {
    pub key: String,
    pub pos: Vec2,
    pub scale: f32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scene {
    sprites: Vec<SpriteNode>,
    texts: Vec<TextNode>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_sprite(&mut self, key: &str, pos: Vec2, scale: f32) {
        self.sprites.push(SpriteNode {
            key: key.to_string(),
            pos,
            scale,
        });
    }

    pub fn add_text(&mut self, pos: Vec2, text: impl Into<String>, style: TextStyle) -> TextId {
        self.texts.push(TextNode {
            text: text.into(),
            pos,
            anchor: Vec2::ZERO,
            style,
            visible: true,
        });
        TextId(self.texts.len() - 1)
    }

    /// Add a text node anchored at its center
    pub fn add_centered_text(
        &mut self,
        pos: Vec2,
        text: impl Into<String>,
        style: TextStyle,
    ) -> TextId {
        let id = self.add_text(pos, text, style);
        self.texts[id.0].anchor = Vec2::splat(0.5);
        id
    }

    pub fn text(&self, id: TextId) -> &TextNode {
        &self.texts[id.0]
    }

    pub fn set_text(&mut self, id: TextId, text: impl Into<String>) {
        self.texts[id.0].text = text.into();
    }

    pub fn set_visible(&mut self, id: TextId, visible: bool) {
        self.texts[id.0].visible = visible;
    }

    pub fn texts(&self) -> &[TextNode] {
        &self.texts
    }

    pub fn sprites(&self) -> &[SpriteNode] {
        &self.sprites
    }

    /// First visible text node with exactly this content
    pub fn find_text(&self, text: &str) -> Option<&TextNode> {
        self.texts.iter().find(|t| t.visible && t.text == text)
    }

    pub fn clear(&mut self) {
        self.sprites.clear();
        self.texts.clear();
    }
}
