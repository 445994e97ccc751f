//! Sound queues and the channel pair to the audio sink thread.
//!
//! Responders only ever touch `Messages<AudioCmd>`; [`register_sound_queues`]
//! is enough for them to run. [`setup_audio`] additionally starts the sink
//! thread and stores its [`AudioBridge`]; [`shutdown_audio`] stops it.

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::systems::audio::audio_thread;
use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};
use log::{info, warn};
use std::thread::JoinHandle;

/// Channel ends held by the ECS side of the audio sink.
#[derive(Resource)]
pub struct AudioBridge {
    /// Commands to the sink thread.
    pub tx_cmd: Sender<AudioCmd>,
    /// Replies from the sink thread.
    pub rx_msg: Receiver<AudioMessage>,
    handle: JoinHandle<()>,
}

impl AudioBridge {
    /// Start the sink thread.
    pub fn spawn() -> Self {
        let (tx_cmd, rx_cmd) = unbounded::<AudioCmd>();
        let (tx_msg, rx_msg) = unbounded::<AudioMessage>();
        let handle = std::thread::spawn(move || audio_thread(rx_cmd, tx_msg));
        Self {
            tx_cmd,
            rx_msg,
            handle,
        }
    }

    /// Ask the sink thread to exit and wait for it.
    pub fn stop(self) {
        if self.tx_cmd.send(AudioCmd::Shutdown).is_err() {
            warn!("audio thread already gone");
        }
        if self.handle.join().is_err() {
            warn!("audio thread panicked");
        }
    }
}

/// Make sure both sound queues exist. Queued commands survive a second call.
pub fn register_sound_queues(world: &mut World) {
    world.init_resource::<Messages<AudioCmd>>();
    world.init_resource::<Messages<AudioMessage>>();
}

/// Register the sound queues and start the sink thread.
pub fn setup_audio(world: &mut World) {
    register_sound_queues(world);
    world.insert_resource(AudioBridge::spawn());
    info!("audio sink started");
}

/// Stop the sink thread, if one was started.
pub fn shutdown_audio(world: &mut World) {
    if let Some(bridge) = world.remove_resource::<AudioBridge>() {
        bridge.stop();
        info!("audio sink stopped");
    }
}
