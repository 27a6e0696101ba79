//! Rendering host contract.

use std::collections::BTreeMap;

use lathe_math::{to_f32_array, Point3};

use crate::Color;

/// Receiver for the buffers a [`Drawing`](crate::Drawing) produces.
///
/// The drawing never talks to a renderer directly. Index buffers are handed
/// over once in [`create_indexed`](Self::create_indexed); afterwards only
/// positions and normals are reissued, tagged with the surface generation
/// that produced them.
pub trait MeshSink {
    /// Host-side handle for one uploaded mesh.
    type Handle;

    /// Create a mesh from full buffers.
    fn create_indexed(
        &mut self,
        positions: &[f32],
        normals: &[f32],
        indices: &[u32],
        color: Color,
    ) -> Self::Handle;

    /// Replace the vertex positions of `handle`.
    fn upload_positions(&mut self, handle: &Self::Handle, positions: &[f32], generation: u64);

    /// Replace the vertex normals of `handle`.
    fn upload_normals(&mut self, handle: &Self::Handle, normals: &[f32], generation: u64);

    /// Change the surface color of `handle`.
    fn set_color(&mut self, _handle: &Self::Handle, _color: Color) {}

    /// Show the guide path and control-point markers of stroke `stroke`.
    fn update_guide(&mut self, _stroke: usize, _path: &[Point3], _markers: &[Point3]) {}

    /// Remove every guide path and marker.
    fn clear_guides(&mut self) {}

    /// Release a mesh.
    fn dispose(&mut self, handle: Self::Handle);
}

/// Handle of a mesh stored in a [`BufferSink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MeshId(pub usize);

/// Latest buffers of one mesh held by a [`BufferSink`].
#[derive(Debug, Clone, PartialEq)]
pub struct MeshBuffers {
    /// Flat positions.
    pub positions: Vec<f32>,
    /// Flat normals.
    pub normals: Vec<f32>,
    /// Triangle indices.
    pub indices: Vec<u32>,
    /// Surface color.
    pub color: Color,
    /// Generation of the last position upload (0 for the initial buffers).
    pub generation: u64,
    /// Number of position uploads after creation.
    pub uploads: usize,
}

/// Guide path and markers of one stroke held by a [`BufferSink`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Guide {
    /// Points along the stroke.
    pub path: Vec<[f32; 3]>,
    /// Accepted control points.
    pub markers: Vec<[f32; 3]>,
}

/// In-memory [`MeshSink`] that keeps the latest buffers of every mesh.
///
/// Useful for headless runs and tests; disposed meshes leave an empty slot
/// so handles stay stable.
#[derive(Debug, Default)]
pub struct BufferSink {
    meshes: Vec<Option<MeshBuffers>>,
    guides: BTreeMap<usize, Guide>,
}

impl BufferSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffers of a live mesh.
    pub fn mesh(&self, id: MeshId) -> Option<&MeshBuffers> {
        self.meshes.get(id.0).and_then(Option::as_ref)
    }

    /// Iterate over live meshes.
    pub fn meshes(&self) -> impl Iterator<Item = (MeshId, &MeshBuffers)> {
        self.meshes
            .iter()
            .enumerate()
            .filter_map(|(i, m)| m.as_ref().map(|m| (MeshId(i), m)))
    }

    /// Number of live meshes.
    pub fn live_meshes(&self) -> usize {
        self.meshes.iter().filter(|m| m.is_some()).count()
    }

    /// Guide of stroke `stroke`, if one was shown.
    pub fn guide(&self, stroke: usize) -> Option<&Guide> {
        self.guides.get(&stroke)
    }

    /// Number of strokes with a visible guide.
    pub fn guide_count(&self) -> usize {
        self.guides.len()
    }

    fn mesh_mut(&mut self, id: MeshId) -> Option<&mut MeshBuffers> {
        self.meshes.get_mut(id.0).and_then(Option::as_mut)
    }
}

impl MeshSink for BufferSink {
    type Handle = MeshId;

    fn create_indexed(
        &mut self,
        positions: &[f32],
        normals: &[f32],
        indices: &[u32],
        color: Color,
    ) -> MeshId {
        self.meshes.push(Some(MeshBuffers {
            positions: positions.to_vec(),
            normals: normals.to_vec(),
            indices: indices.to_vec(),
            color,
            generation: 0,
            uploads: 0,
        }));
        MeshId(self.meshes.len() - 1)
    }

    fn upload_positions(&mut self, handle: &MeshId, positions: &[f32], generation: u64) {
        if let Some(mesh) = self.mesh_mut(*handle) {
            mesh.positions.clear();
            mesh.positions.extend_from_slice(positions);
            mesh.generation = generation;
            mesh.uploads += 1;
        }
    }

    fn upload_normals(&mut self, handle: &MeshId, normals: &[f32], _generation: u64) {
        if let Some(mesh) = self.mesh_mut(*handle) {
            mesh.normals.clear();
            mesh.normals.extend_from_slice(normals);
        }
    }

    fn set_color(&mut self, handle: &MeshId, color: Color) {
        if let Some(mesh) = self.mesh_mut(*handle) {
            mesh.color = color;
        }
    }

    fn update_guide(&mut self, stroke: usize, path: &[Point3], markers: &[Point3]) {
        let guide = self.guides.entry(stroke).or_default();
        guide.path = path.iter().map(to_f32_array).collect();
        guide.markers = markers.iter().map(to_f32_array).collect();
    }

    fn clear_guides(&mut self) {
        self.guides.clear();
    }

    fn dispose(&mut self, handle: MeshId) {
        if let Some(slot) = self.meshes.get_mut(handle.0) {
            *slot = None;
        }
    }
}
