use super::bounds::Aabb;
use glam::{Mat3, Mat4, Vec2, Vec3};
use smallvec::{smallvec, SmallVec};
use std::f32::consts::TAU;

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ModelVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub tex_coord: [f32; 2],
    pub tangent: [f32; 4],
}

/// Contiguous index range drawn with one material slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FaceGroup {
    pub start: u32,
    pub count: u32,
    pub material: usize,
}

/// CPU-side triangle mesh. Texture coordinates use a top-left origin.
#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<ModelVertex>,
    pub indices: Vec<u32>,
    pub groups: SmallVec<[FaceGroup; 6]>,
}

impl MeshData {
    /// Assemble a mesh from loose attribute streams, filling in what is missing.
    ///
    /// Absent indices mean a plain triangle list; absent normals are averaged
    /// from faces; absent tangents are derived from the UVs.
    pub fn from_attributes(
        positions: Vec<[f32; 3]>,
        normals: Option<Vec<[f32; 3]>>,
        tex_coords: Option<Vec<[f32; 2]>>,
        tangents: Option<Vec<[f32; 4]>>,
        indices: Option<Vec<u32>>,
    ) -> Self {
        let n = positions.len();
        let indices: Vec<u32> = indices.unwrap_or_else(|| (0..n as u32).collect());
        let indices: Vec<u32> = indices
            .chunks_exact(3)
            .filter(|tri| tri.iter().all(|&i| (i as usize) < n))
            .flatten()
            .copied()
            .collect();
        let normals = match normals {
            Some(v) if v.len() == n => v,
            _ => compute_normals(&positions, &indices),
        };
        let tex_coords = match tex_coords {
            Some(v) if v.len() == n => v,
            _ => vec![[0.0; 2]; n],
        };
        let tangents = match tangents {
            Some(v) if v.len() == n => v,
            _ => compute_tangents(&positions, &normals, &tex_coords, &indices),
        };

        let vertices = (0..n)
            .map(|i| ModelVertex {
                position: positions[i],
                normal: normals[i],
                tex_coord: tex_coords[i],
                tangent: tangents[i],
            })
            .collect();
        let count = indices.len() as u32;
        Self {
            vertices,
            indices,
            groups: smallvec![FaceGroup {
                start: 0,
                count,
                material: 0,
            }],
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_points(self.vertices.iter().map(|v| Vec3::from(v.position)))
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Bake `m` into positions, normals and tangents.
    pub fn transform(&mut self, m: &Mat4) {
        let normal_m = Mat3::from_mat4(*m).inverse().transpose();
        // Mirroring transforms flip winding and tangent handedness.
        let flip = m.determinant() < 0.0;
        for v in &mut self.vertices {
            v.position = m.transform_point3(Vec3::from(v.position)).to_array();
            v.normal = (normal_m * Vec3::from(v.normal)).normalize_or_zero().to_array();
            let t = m
                .transform_vector3(Vec3::new(v.tangent[0], v.tangent[1], v.tangent[2]))
                .normalize_or_zero();
            let w = if flip { -v.tangent[3] } else { v.tangent[3] };
            v.tangent = [t.x, t.y, t.z, w];
        }
        if flip {
            for tri in self.indices.chunks_exact_mut(3) {
                tri.swap(1, 2);
            }
        }
    }
}

/// Flat disc of `radius` in the XY plane facing +Z, `segments` wedges around a centre vertex.
pub fn circle(radius: f32, segments: u32) -> MeshData {
    let segments = segments.max(3);
    let mut positions = vec![[0.0, 0.0, 0.0]];
    let mut tex_coords = vec![[0.5, 0.5]];
    for i in 0..=segments {
        let a = i as f32 / segments as f32 * TAU;
        let (s, c) = a.sin_cos();
        positions.push([c * radius, s * radius, 0.0]);
        tex_coords.push([(c + 1.0) * 0.5, 1.0 - (s + 1.0) * 0.5]);
    }
    let normals = vec![[0.0, 0.0, 1.0]; positions.len()];
    let mut indices = Vec::with_capacity(segments as usize * 3);
    for i in 1..=segments {
        indices.extend_from_slice(&[0, i, i + 1]);
    }
    MeshData::from_attributes(positions, Some(normals), Some(tex_coords), None, Some(indices))
}

/// Axis-aligned box centred on the origin with one face group per side.
///
/// Group order is +X, -X, +Y, -Y, +Z, -Z and group `i` uses material slot `i`.
pub fn box_mesh(size: Vec3) -> MeshData {
    let half = size * 0.5;
    // (normal, u axis, v axis) with u x v == normal
    let faces: [(Vec3, Vec3, Vec3); 6] = [
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
    ];

    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);
    let mut groups = SmallVec::new();
    for (slot, (n, u, v)) in faces.iter().enumerate() {
        let center = *n * half.dot(n.abs());
        let hu = *u * half.dot(u.abs());
        let hv = *v * half.dot(v.abs());
        let base = vertices.len() as u32;
        // top-left, bottom-left, bottom-right, top-right
        let corners = [
            (center - hu + hv, [0.0, 0.0]),
            (center - hu - hv, [0.0, 1.0]),
            (center + hu - hv, [1.0, 1.0]),
            (center + hu + hv, [1.0, 0.0]),
        ];
        for (p, uv) in corners {
            vertices.push(ModelVertex {
                position: p.to_array(),
                normal: n.to_array(),
                tex_coord: uv,
                tangent: [u.x, u.y, u.z, 1.0],
            });
        }
        let start = indices.len() as u32;
        indices.extend_from_slice(&[base + 1, base + 2, base + 3, base + 1, base + 3, base]);
        groups.push(FaceGroup {
            start,
            count: 6,
            material: slot,
        });
    }
    MeshData {
        vertices,
        indices,
        groups,
    }
}

pub fn compute_normals(positions: &[[f32; 3]], indices: &[u32]) -> Vec<[f32; 3]> {
    let mut acc = vec![Vec3::ZERO; positions.len()];
    for tri in indices.chunks_exact(3) {
        let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        let pa = Vec3::from(positions[a]);
        let face = (Vec3::from(positions[b]) - pa).cross(Vec3::from(positions[c]) - pa);
        acc[a] += face;
        acc[b] += face;
        acc[c] += face;
    }
    acc.into_iter()
        .map(|n| {
            let n = n.normalize_or_zero();
            if n == Vec3::ZERO {
                [0.0, 1.0, 0.0]
            } else {
                n.to_array()
            }
        })
        .collect()
}

pub fn compute_tangents(
    positions: &[[f32; 3]],
    normals: &[[f32; 3]],
    uvs: &[[f32; 2]],
    indices: &[u32],
) -> Vec<[f32; 4]> {
    let mut tan1 = vec![Vec3::ZERO; positions.len()];
    let mut tan2 = vec![Vec3::ZERO; positions.len()];

    for tri in indices.chunks_exact(3) {
        let (i1, i2, i3) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        let v1 = Vec3::from(positions[i1]);
        let e1 = Vec3::from(positions[i2]) - v1;
        let e2 = Vec3::from(positions[i3]) - v1;
        let w1 = Vec2::from(uvs[i1]);
        let d1 = Vec2::from(uvs[i2]) - w1;
        let d2 = Vec2::from(uvs[i3]) - w1;

        let r_denom = d1.x * d2.y - d2.x * d1.y;
        let r = if r_denom.abs() < 1e-6 { 0.0 } else { 1.0 / r_denom };
        let sdir = (e1 * d2.y - e2 * d1.y) * r;
        let tdir = (e2 * d1.x - e1 * d2.x) * r;

        for i in [i1, i2, i3] {
            tan1[i] += sdir;
            tan2[i] += tdir;
        }
    }

    (0..positions.len())
        .map(|i| {
            let n = Vec3::from(normals[i]);
            let t = tan1[i];
            // Gram-Schmidt
            let xyz = (t - n * n.dot(t)).normalize_or_zero();
            let w = if n.cross(t).dot(tan2[i]) < 0.0 { -1.0 } else { 1.0 };
            [xyz.x, xyz.y, xyz.z, w]
        })
        .collect()
}
