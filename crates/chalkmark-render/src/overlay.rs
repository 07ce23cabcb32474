//! Stateful owner of one rendered annotation.
//!
//! Geometry is never cached: every regeneration draws fresh randomness, so the overlay only
//! remembers what it needs to decide *when* to regenerate (the last measured size and the mark).

use crate::Result;
use crate::svg::{SvgRenderOptions, render_mark_svg};
use chalkmark_core::{ContentBox, Mark, Viewport};
use rand::Rng;

pub struct AnnotationOverlay<R: Rng> {
    mark: Mark,
    options: SvgRenderOptions,
    rng: R,
    content: Option<ContentBox>,
    svg: Option<String>,
    generation: u64,
}

impl<R: Rng> AnnotationOverlay<R> {
    pub fn new(mark: Mark, options: SvgRenderOptions, rng: R) -> Self {
        Self {
            mark,
            options,
            rng,
            content: None,
            svg: None,
            generation: 0,
        }
    }

    pub fn mark(&self) -> &Mark {
        &self.mark
    }

    /// The last rendered SVG, if a size has been reported.
    pub fn svg(&self) -> Option<&str> {
        self.svg.as_deref()
    }

    pub fn viewport(&self) -> Option<Viewport> {
        self.content.map(|c| self.mark.viewport(c))
    }

    /// How many times the overlay has been regenerated.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Reports a new measured size. Regenerates only when it differs from the last one.
    ///
    /// Returns whether the SVG changed. On error the previous size and SVG are kept.
    pub fn set_content_size(&mut self, content: ContentBox) -> Result<bool> {
        let content = content.normalized();
        if self.content == Some(content) {
            return Ok(false);
        }
        let svg = render_mark_svg(content, &self.mark, &mut self.rng, &self.options)?;
        self.commit(content, svg);
        Ok(true)
    }

    /// Replaces the mark, regenerating if a size is already known.
    ///
    /// A mark that fails to render is not stored.
    pub fn set_mark(&mut self, mark: Mark) -> Result<()> {
        if mark == self.mark {
            return Ok(());
        }
        if let Some(content) = self.content {
            let svg = render_mark_svg(content, &mark, &mut self.rng, &self.options)?;
            self.commit(content, svg);
        }
        self.mark = mark;
        Ok(())
    }

    /// Forces a regeneration with fresh randomness (e.g. on every layout pass).
    pub fn rerender(&mut self) -> Result<bool> {
        let Some(content) = self.content else {
            return Ok(false);
        };
        let svg = render_mark_svg(content, &self.mark, &mut self.rng, &self.options)?;
        self.commit(content, svg);
        Ok(true)
    }

    /// Drops the rendered output, as when the annotated element goes away.
    pub fn clear(&mut self) {
        self.content = None;
        self.svg = None;
    }

    fn commit(&mut self, content: ContentBox, svg: String) {
        self.generation += 1;
        tracing::debug!(
            width = content.width,
            height = content.height,
            generation = self.generation,
            "annotation overlay regenerated"
        );
        self.content = Some(content);
        self.svg = Some(svg);
    }
}
