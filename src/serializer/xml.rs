//! Simulator XML for the appliance and device sections of a wire document.
//!
//! `$`-prefixed wire fields become attributes, everything else a child
//! element, the same way the backend lays out `appliances.xml` and
//! `devices.xml`.

use super::document::{Appliance, Appliances, Device, Devices};
use crate::error::DocumentError;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::fmt::Display;

type XmlResult = Result<(), DocumentError>;

fn xml_error(e: impl Display) -> DocumentError {
    DocumentError::XmlError(e.to_string())
}

pub(super) fn render_appliances(appliances: &Appliances) -> Result<String, DocumentError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    write_decl(&mut writer)?;
    write_start(&mut writer, BytesStart::new("appliances"))?;
    for appliance in &appliances.appliance {
        write_appliance(&mut writer, appliance)?;
    }
    write_end(&mut writer, "appliances")?;
    into_string(writer)
}

pub(super) fn render_devices(devices: &Devices) -> Result<String, DocumentError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    write_decl(&mut writer)?;
    write_start(&mut writer, BytesStart::new("devices"))?;
    for device in &devices.device {
        write_device(&mut writer, device)?;
    }
    write_end(&mut writer, "devices")?;
    into_string(writer)
}

fn write_appliance(writer: &mut Writer<Vec<u8>>, appliance: &Appliance) -> XmlResult {
    write_start(writer, BytesStart::new("appliance"))?;
    write_text_element(writer, "name", &appliance.name)?;
    write_text_element(writer, "xcoord", appliance.xcoord)?;
    write_text_element(writer, "ycoord", appliance.ycoord)?;
    write_text_element(writer, "file", &appliance.file)?;

    write_start(writer, BytesStart::new("applications"))?;
    for app in &appliance.applications.application {
        let tasksize = app.tasksize.to_string();
        let mut element = BytesStart::new("application");
        element.push_attribute(("tasksize", tasksize.as_str()));
        write_start(writer, element)?;
        write_text_element(writer, "name", &app.name)?;
        write_text_element(writer, "freq", app.freq)?;
        write_text_element(writer, "instance", &app.instance)?;
        write_text_element(writer, "numOfInstruction", app.num_of_instruction)?;
        write_text_element(writer, "threshold", app.threshold)?;
        write_text_element(writer, "strategy", &app.strategy)?;
        write_text_element(writer, "canJoin", app.can_join)?;
        write_end(writer, "application")?;
    }
    write_end(writer, "applications")?;

    match &appliance.neighbours.neighbour {
        Some(neighbours) => {
            write_start(writer, BytesStart::new("neighbours"))?;
            for neighbour in neighbours {
                write_start(writer, BytesStart::new("neighbour"))?;
                write_text_element(writer, "name", &neighbour.name)?;
                write_text_element(writer, "latency", neighbour.latency)?;
                if let Some(parent) = neighbour.parent {
                    write_text_element(writer, "parent", parent)?;
                }
                write_end(writer, "neighbour")?;
            }
            write_end(writer, "neighbours")?;
        }
        None => {
            writer
                .write_event(Event::Empty(BytesStart::new("neighbours")))
                .map_err(xml_error)?;
        }
    }

    write_end(writer, "appliance")
}

fn write_device(writer: &mut Writer<Vec<u8>>, device: &Device) -> XmlResult {
    let starttime = device.starttime.to_string();
    let stoptime = device.stoptime.to_string();
    let number = device.number.to_string();
    let filesize = device.filesize.to_string();

    let mut element = BytesStart::new("device");
    element.push_attribute(("starttime", starttime.as_str()));
    element.push_attribute(("stoptime", stoptime.as_str()));
    element.push_attribute(("number", number.as_str()));
    element.push_attribute(("filesize", filesize.as_str()));
    write_start(writer, element)?;

    write_text_element(writer, "name", &device.name)?;
    write_text_element(writer, "freq", device.freq)?;
    write_text_element(writer, "sensor", device.sensor)?;
    write_text_element(writer, "maxinbw", device.maxinbw)?;
    write_text_element(writer, "maxoutbw", device.maxoutbw)?;
    write_text_element(writer, "diskbw", device.diskbw)?;
    write_text_element(writer, "reposize", device.reposize)?;
    write_text_element(writer, "strategy", &device.strategy)?;
    write_text_element(writer, "xCoord", device.x_coord)?;
    write_text_element(writer, "yCoord", device.y_coord)?;

    write_end(writer, "device")
}

fn write_decl(writer: &mut Writer<Vec<u8>>) -> XmlResult {
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(xml_error)
}

fn write_start(writer: &mut Writer<Vec<u8>>, element: BytesStart<'_>) -> XmlResult {
    writer.write_event(Event::Start(element)).map_err(xml_error)
}

fn write_end(writer: &mut Writer<Vec<u8>>, name: &str) -> XmlResult {
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(xml_error)
}

fn write_text_element(writer: &mut Writer<Vec<u8>>, name: &str, value: impl Display) -> XmlResult {
    let text = value.to_string();
    write_start(writer, BytesStart::new(name))?;
    writer
        .write_event(Event::Text(BytesText::new(&text)))
        .map_err(xml_error)?;
    write_end(writer, name)
}

fn into_string(writer: Writer<Vec<u8>>) -> Result<String, DocumentError> {
    String::from_utf8(writer.into_inner()).map_err(xml_error)
}
