use std::collections::HashMap;

use exifpro_core::compare::{CompareViewport, ImageRef, ReleaseFlag};
use exifpro_core::session::{ImageId, ImageLibrary};

/// The comparison session: which two library images are shown, plus the
/// viewport that owns pan, zoom and slider state.
pub struct CompareState {
    pub viewport: CompareViewport<egui::TextureId, ReleaseFlag>,
    pub before: Option<ImageId>,
    pub after: Option<ImageId>,
}

impl Default for CompareState {
    fn default() -> Self {
        Self {
            viewport: CompareViewport::new(ReleaseFlag::default()),
            before: None,
            after: None,
        }
    }
}

impl CompareState {
    /// Show a new pair. Zoom and slider start over.
    pub fn assign(
        &mut self,
        before: Option<ImageId>,
        after: Option<ImageId>,
        library: &ImageLibrary,
        textures: &HashMap<ImageId, egui::TextureHandle>,
    ) {
        self.before = before;
        self.after = after;
        self.viewport.set_images(
            image_ref(before, library, textures),
            image_ref(after, library, textures),
        );
    }

    /// Drop `id` from the pair if it is part of it.
    pub fn forget(
        &mut self,
        id: ImageId,
        library: &ImageLibrary,
        textures: &HashMap<ImageId, egui::TextureHandle>,
    ) {
        if self.before != Some(id) && self.after != Some(id) {
            return;
        }
        let before = self.before.filter(|b| *b != id);
        let after = self.after.filter(|a| *a != id);
        self.assign(before, after, library, textures);
    }

    pub fn clear(&mut self) {
        self.before = None;
        self.after = None;
        self.viewport.set_images(None, None);
    }

    /// Fill empty slots from the library, most recent image as "after".
    pub fn autofill(
        &mut self,
        library: &ImageLibrary,
        textures: &HashMap<ImageId, egui::TextureHandle>,
    ) {
        if self.before.is_some() && self.after.is_some() {
            return;
        }
        let ids: Vec<ImageId> = library.iter().map(|e| e.id).collect();
        let (before, after) = match ids.as_slice() {
            [] => return,
            [only] => (Some(*only), None),
            [.., b, a] => (Some(*b), Some(*a)),
        };
        let before = self.before.or(before);
        let after = self.after.or(after).filter(|a| Some(*a) != before);
        if before != self.before || after != self.after {
            self.assign(before, after, library, textures);
        }
    }
}

fn image_ref(
    id: Option<ImageId>,
    library: &ImageLibrary,
    textures: &HashMap<ImageId, egui::TextureHandle>,
) -> Option<ImageRef<egui::TextureId>> {
    let id = id?;
    let entry = library.get(id)?;
    let texture = textures.get(&id)?;
    Some(ImageRef::new(texture.id(), entry.natural))
}
