use crate::constants::{
    AO_MAP, BASE_COLOR_MAP, METALNESS_MAP, MODEL_PATH, NORMAL_MAP, ROUGHNESS_MAP,
};
use crate::core::bounds::{fit_to_ground, Aabb, Placement};
use crate::core::mesh::MeshData;
use crate::core::model::parse_glb;
use crate::core::{MODEL_TARGET_SIZE, MODEL_YAW};
use image::RgbaImage;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Decoded texture maps of the model; `None` where a fetch or decode failed.
#[derive(Default)]
pub struct PbrImages {
    pub base_color: Option<RgbaImage>,
    pub metalness: Option<RgbaImage>,
    pub roughness: Option<RgbaImage>,
    pub normal: Option<RgbaImage>,
    pub ao: Option<RgbaImage>,
}

pub struct LoadedModel {
    pub meshes: Vec<MeshData>,
    pub placement: Placement,
    pub textures: PbrImages,
}

pub type PendingModel = Rc<RefCell<Option<LoadedModel>>>;

pub async fn fetch_bytes(url: &str) -> anyhow::Result<Vec<u8>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let response: web::Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("fetch {}: {:?}", url, e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("fetch {}: not a Response: {:?}", url, e))?;
    if !response.ok() {
        anyhow::bail!("fetch {}: HTTP {}", url, response.status());
    }
    let buffer = response
        .array_buffer()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let buffer = JsFuture::from(buffer)
        .await
        .map_err(|e| anyhow::anyhow!("read {}: {:?}", url, e))?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

async fn fetch_image(url: &str) -> anyhow::Result<RgbaImage> {
    let bytes = fetch_bytes(url).await?;
    let img = image::load_from_memory_with_format(&bytes, image::ImageFormat::Png)?;
    Ok(img.to_rgba8())
}

async fn fetch_textures() -> PbrImages {
    let urls = [BASE_COLOR_MAP, METALNESS_MAP, ROUGHNESS_MAP, NORMAL_MAP, AO_MAP];
    let results = futures::future::join_all(urls.iter().map(|u| fetch_image(u))).await;
    let mut maps = urls.iter().zip(results).map(|(url, res)| match res {
        Ok(img) => Some(img),
        Err(e) => {
            log::error!("[model] texture {} failed: {:?}", url, e);
            None
        }
    });
    PbrImages {
        base_color: maps.next().flatten(),
        metalness: maps.next().flatten(),
        roughness: maps.next().flatten(),
        normal: maps.next().flatten(),
        ao: maps.next().flatten(),
    }
}

async fn load_model() -> anyhow::Result<LoadedModel> {
    let bytes = fetch_bytes(MODEL_PATH).await?;
    let meshes = parse_glb(&bytes)?;
    let bounds = meshes
        .iter()
        .fold(Aabb::EMPTY, |acc, m| acc.union(m.bounds()));
    let placement = fit_to_ground(&bounds, MODEL_TARGET_SIZE, MODEL_YAW);
    let textures = fetch_textures().await;
    log::info!(
        "[model] {} meshes, {} triangles, scale {:.3}",
        meshes.len(),
        meshes.iter().map(MeshData::triangle_count).sum::<usize>(),
        placement.scale
    );
    Ok(LoadedModel {
        meshes,
        placement,
        textures,
    })
}

/// Fetch the gramophone in the background; a failure leaves the stage empty.
pub fn spawn_model_load(pending: PendingModel) {
    spawn_local(async move {
        match load_model().await {
            Ok(model) => *pending.borrow_mut() = Some(model),
            Err(e) => log::error!("[model] load of {} failed: {:?}", MODEL_PATH, e),
        }
    });
}
