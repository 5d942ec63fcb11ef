//! Asset loading: fetch a binary glTF and flatten its default scene into one
//! CPU mesh in asset space.

use crate::render::Vertex;
use anyhow::{anyhow, bail, Context};
use glam::{Mat3, Mat4, Vec3};
use gltf::buffer::Source;
use gltf::mesh::util::ReadIndices;
use viewer_core::BoundingVolume;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[derive(Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn bounds(&self) -> Option<BoundingVolume> {
        BoundingVolume::from_points(self.vertices.iter().map(|v| Vec3::from(v.pos)))
    }
}

pub async fn fetch_bytes(url: &str) -> anyhow::Result<Vec<u8>> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let opts = web::RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(web::RequestMode::Cors);
    let request = web::Request::new_with_str_and_init(url, &opts)
        .map_err(|e| anyhow!("request {}: {:?}", url, e))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| anyhow!("fetch {}: {:?}", url, e))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|e| anyhow!(format!("{:?}", e)))?;
    if !resp.ok() {
        bail!("GET {} -> HTTP {}", url, resp.status());
    }
    let buf = JsFuture::from(resp.array_buffer().map_err(|e| anyhow!("{:?}", e))?)
        .await
        .map_err(|e| anyhow!("read body of {}: {:?}", url, e))?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

/// Decode a `.glb`: every triangle primitive of the default scene, node
/// transforms baked in. External buffer URIs are not followed.
pub fn decode_glb(bytes: &[u8]) -> anyhow::Result<MeshData> {
    let doc = gltf::Gltf::from_slice(bytes).context("failed to parse glTF")?;
    let blob = doc.blob.as_deref();
    let scene = doc
        .default_scene()
        .or_else(|| doc.scenes().next())
        .ok_or_else(|| anyhow!("glTF has no scene"))?;

    let mut mesh = MeshData::default();
    for node in scene.nodes() {
        visit_node(&node, Mat4::IDENTITY, blob, &mut mesh);
    }
    if mesh.vertices.is_empty() || mesh.indices.is_empty() {
        bail!("no geometry found in glTF");
    }
    Ok(mesh)
}

fn visit_node(node: &gltf::Node, parent: Mat4, blob: Option<&[u8]>, out: &mut MeshData) {
    let world = parent * Mat4::from_cols_array_2d(&node.transform().matrix());
    if let Some(m) = node.mesh() {
        let normal_matrix = Mat3::from_mat4(world).inverse().transpose();
        for prim in m.primitives() {
            if prim.mode() != gltf::mesh::Mode::Triangles {
                continue;
            }
            let reader = prim.reader(|b| match b.source() {
                Source::Bin => blob,
                Source::Uri(_) => None,
            });
            let positions: Vec<Vec3> = match reader.read_positions() {
                Some(it) => it.map(|p| world.transform_point3(Vec3::from(p))).collect(),
                None => continue,
            };
            let normals: Option<Vec<Vec3>> = reader.read_normals().map(|it| {
                it.map(|n| (normal_matrix * Vec3::from(n)).normalize_or_zero())
                    .collect()
            });
            let indices: Vec<u32> = match reader.read_indices() {
                Some(ReadIndices::U8(it)) => it.map(u32::from).collect(),
                Some(ReadIndices::U16(it)) => it.map(u32::from).collect(),
                Some(ReadIndices::U32(it)) => it.collect(),
                None => (0..positions.len() as u32).collect(),
            };
            append_primitive(out, &positions, normals.as_deref(), &indices);
        }
    }
    for child in node.children() {
        visit_node(&child, world, blob, out);
    }
}

fn append_primitive(out: &mut MeshData, positions: &[Vec3], normals: Option<&[Vec3]>, indices: &[u32]) {
    let in_range = |i: &u32| (*i as usize) < positions.len();
    match normals.filter(|n| n.len() == positions.len()) {
        Some(normals) => {
            let base = out.vertices.len() as u32;
            out.vertices.extend(positions.iter().zip(normals).map(|(p, n)| Vertex {
                pos: p.to_array(),
                nrm: n.to_array(),
            }));
            for tri in indices.chunks_exact(3) {
                if tri.iter().all(in_range) {
                    out.indices.extend(tri.iter().map(|i| base + i));
                }
            }
        }
        None => {
            // Unweld and use face normals.
            for tri in indices.chunks_exact(3) {
                if !tri.iter().all(in_range) {
                    continue;
                }
                let [a, b, c] = [0, 1, 2].map(|k| positions[tri[k] as usize]);
                let n = (b - a).cross(c - a).normalize_or_zero();
                for p in [a, b, c] {
                    out.indices.push(out.vertices.len() as u32);
                    out.vertices.push(Vertex {
                        pos: p.to_array(),
                        nrm: n.to_array(),
                    });
                }
            }
        }
    }
}
